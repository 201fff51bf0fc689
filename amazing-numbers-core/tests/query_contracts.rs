use amazing_numbers_core::query::{Conflict, Filter};
use amazing_numbers_core::{
    Outcome, Property, PropertySet, QueryError, Request, evaluate, execute, search,
};

fn found(request: &Request) -> Vec<u64> {
    search(request)
        .expect("request should be accepted")
        .map(|entry| entry.number)
        .collect()
}

fn conflicts(request: &Request) -> Vec<Conflict> {
    match search(request) {
        Err(QueryError::Conflict { conflicts }) => conflicts,
        other => panic!("expected a conflict, got {other:?}"),
    }
}

#[test]
fn unfiltered_range_lists_consecutive_numbers() {
    assert_eq!(found(&Request::range(1, 5)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn buzz_range_from_one() {
    let request = Request::range(1, 2).include(Property::Buzz);
    assert_eq!(found(&request), vec![7, 14]);
}

#[test]
fn even_with_odd_excluded_is_redundant_not_conflicting() {
    let request = Request::range(1, 3)
        .include(Property::Even)
        .exclude(Property::Odd);
    assert_eq!(found(&request), vec![2, 4, 6]);

    let request = Request::range(1, 2)
        .include(Property::Happy)
        .exclude(Property::Sad);
    assert_eq!(found(&request), vec![1, 7]);
}

#[test]
fn same_property_included_and_excluded_conflicts() {
    let request = Request::range(1, 3)
        .include(Property::Even)
        .exclude(Property::Even);
    assert_eq!(
        conflicts(&request),
        vec![Conflict(
            Filter::include(Property::Even),
            Filter::exclude(Property::Even)
        )]
    );
}

#[test]
fn exclusive_properties_included_together_conflict() {
    for (a, b) in [
        (Property::Even, Property::Odd),
        (Property::Duck, Property::Spy),
        (Property::Sunny, Property::Square),
        (Property::Happy, Property::Sad),
    ] {
        let request = Request::range(1, 1).include(a).include(b);
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        assert_eq!(
            conflicts(&request),
            vec![Conflict(Filter::include(first), Filter::include(second))]
        );
    }
}

#[test]
fn excluding_both_halves_of_a_pair_conflicts() {
    let request = Request::range(1, 1)
        .exclude(Property::Odd)
        .exclude(Property::Even);
    let err = search(&request).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The request contains mutually exclusive properties: [-EVEN, -ODD]\n\
         There are no numbers with these properties."
    );
}

#[test]
fn independent_properties_combine_freely() {
    let request = Request::range(1, 4)
        .include(Property::Palindromic)
        .include(Property::Gapful)
        .exclude(Property::Duck);
    let numbers = found(&request);
    assert_eq!(numbers.len(), 4);
    for n in numbers {
        let set = evaluate(n);
        assert!(set.contains(Property::Palindromic), "{n}");
        assert!(set.contains(Property::Gapful), "{n}");
        assert!(!set.contains(Property::Duck), "{n}");
    }
}

#[test]
fn execute_dispatches_on_count() {
    match execute(&Request::single(12)).unwrap() {
        Outcome::Report(report) => {
            let expected: PropertySet = [
                Property::Even,
                Property::Jumping,
                Property::Sad,
            ]
            .into_iter()
            .collect();
            assert_eq!(report.satisfied(), expected);
        }
        other => panic!("expected a report, got {other:?}"),
    }

    match execute(&Request::range(12, 1)).unwrap() {
        Outcome::Matches(mut matches) => {
            assert_eq!(matches.next().map(|e| e.number), Some(12));
            assert_eq!(matches.next(), None);
        }
        other => panic!("expected matches, got {other:?}"),
    }
}

#[test]
fn rejected_requests_never_start_scanning() {
    let request = Request::range(1, 1)
        .include(Property::Square)
        .include(Property::Sunny)
        .exclude(Property::Even)
        .exclude(Property::Odd);
    assert_eq!(conflicts(&request).len(), 2);
}

#[test]
fn predicate_examples() {
    assert!(Property::Happy.test(1));
    assert!(!Property::Happy.test(4));
    assert!(Property::Sad.test(4));
    assert!(Property::Happy.test(7));
    assert!(Property::Gapful.test(100));
    assert!(!Property::Gapful.test(10));
}
