//! # Query Engine
//!
//! Validates a parsed [`Request`] and answers it, either with a full
//! [`Report`] for one number or with a lazy [`Matches`] scan over
//! consecutive numbers.
//!
//! Validation always completes before any scanning starts. A request that
//! can never match is rejected with every offending [`Conflict`] at once,
//! so a search for impossible numbers never appears to hang.
//!
//! ## Example
//! ```rust
//! use amazing_numbers_core::properties::Property;
//! use amazing_numbers_core::query::{Request, search};
//!
//! let request = Request::range(1, 2).include(Property::Buzz);
//! let numbers: Vec<u64> = search(&request)
//!     .unwrap()
//!     .map(|entry| entry.number)
//!     .collect();
//! assert_eq!(numbers, vec![7, 14]);
//! ```

use crate::error::{QueryError, Result};
use crate::properties::{Property, PropertySet, evaluate};
use crate::utils::FilterError;
use std::{fmt::Display, iter::FusedIterator};

/// A parsed request.
///
/// `count == None` asks for a single-number report; filters are ignored in
/// that mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub start: u64,
    pub count: Option<u64>,
    pub included: PropertySet,
    pub excluded: PropertySet,
}

impl Request {
    pub fn single(number: u64) -> Self {
        Self {
            start: number,
            count: None,
            included: PropertySet::new(),
            excluded: PropertySet::new(),
        }
    }

    pub fn range(start: u64, count: u64) -> Self {
        Self {
            count: Some(count),
            ..Self::single(start)
        }
    }

    pub fn include(mut self, property: Property) -> Self {
        self.included.insert(property);
        self
    }

    pub fn exclude(mut self, property: Property) -> Self {
        self.excluded.insert(property);
        self
    }

    /// Checks the request without evaluating any number.
    pub fn validate(&self) -> Result<()> {
        let Some(count) = self.count else {
            return match self.start {
                0 => Err(QueryError::InvalidNumber {
                    input: self.start.to_string(),
                    reason: FilterError::Below(1),
                }),
                _ => Ok(()),
            };
        };

        if count == 0 {
            return Err(QueryError::InvalidCount {
                input: count.to_string(),
                reason: FilterError::Below(1),
            });
        }

        let conflicts = self.conflicts();
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(QueryError::Conflict { conflicts })
        }
    }

    /// Every filter combination that no number can satisfy.
    ///
    /// Including one half of a complementary pair while excluding the other
    /// (`EVEN -ODD`) restates a single constraint and is not reported.
    fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .included
            .intersection(&self.excluded)
            .iter()
            .map(|p| Conflict(Filter::include(p), Filter::exclude(p)))
            .collect();

        conflicts.extend(
            exclusive_pairs(&self.included)
                .map(|(a, b)| Conflict(Filter::include(a), Filter::include(b))),
        );
        conflicts.extend(
            exclusive_pairs(&self.excluded)
                .map(|(a, b)| Conflict(Filter::exclude(a), Filter::exclude(b))),
        );
        conflicts
    }
}

/// Unordered pairs `(a, b)`, `a` before `b` canonically, that cannot co-occur.
fn exclusive_pairs(set: &PropertySet) -> impl Iterator<Item = (Property, Property)> + '_ {
    set.iter().flat_map(move |a| {
        set.iter()
            .filter(move |b| a < *b && a.is_mutually_exclusive_with(*b))
            .map(move |b| (a, b))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Include,
    Exclude,
}

/// A property as it appeared in a request: wanted, or prefixed with `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Filter {
    pub property: Property,
    pub polarity: Polarity,
}

impl Filter {
    pub fn include(property: Property) -> Self {
        Self {
            property,
            polarity: Polarity::Include,
        }
    }

    pub fn exclude(property: Property) -> Self {
        Self {
            property,
            polarity: Polarity::Exclude,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            Polarity::Include => write!(f, "{}", self.property),
            Polarity::Exclude => write!(f, "-{}", self.property),
        }
    }
}

/// Two filters that together exclude every number. Renders as `[EVEN, ODD]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conflict(pub Filter, pub Filter);

impl Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

/// A number that passed the filters, with everything it satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultEntry {
    pub number: u64,
    pub satisfied: PropertySet,
}

/// The full satisfaction vector of one number, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub number: u64,
    pub properties: [(Property, bool); Property::COUNT],
}

impl Report {
    pub fn satisfied(&self) -> PropertySet {
        self.properties
            .iter()
            .filter(|(_, holds)| *holds)
            .map(|(property, _)| *property)
            .collect()
    }
}

/// Serializes as `{"number": 7, "properties": {"buzz": true, ...}}`.
#[cfg(feature = "serde")]
impl serde::Serialize for Report {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        struct Properties<'a>(&'a [(Property, bool)]);

        impl serde::Serialize for Properties<'_> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_map(self.0.iter().map(|(p, holds)| (p.label(), holds)))
            }
        }

        let mut state = serializer.serialize_struct("Report", 2)?;
        state.serialize_field("number", &self.number)?;
        state.serialize_field("properties", &Properties(&self.properties))?;
        state.end()
    }
}

/// Lazy scan over `start, start + 1, ...` yielding the first `count` matches.
///
/// Ends early, without error, if the scan would pass `u64::MAX`.
#[derive(Debug, Clone)]
pub struct Matches {
    next: Option<u64>,
    remaining: u64,
    included: PropertySet,
    excluded: PropertySet,
}

impl Matches {
    fn new(request: &Request, count: u64) -> Self {
        Self {
            next: Some(request.start),
            remaining: count,
            included: request.included,
            excluded: request.excluded,
        }
    }

    fn accepts(&self, satisfied: &PropertySet) -> bool {
        satisfied.is_superset(&self.included) && satisfied.is_disjoint(&self.excluded)
    }
}

impl Iterator for Matches {
    type Item = ResultEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let number = self.next?;
            self.next = number.checked_add(1);

            let satisfied = evaluate(number);
            if self.accepts(&satisfied) {
                self.remaining -= 1;
                tracing::trace!(number, remaining = self.remaining, "match");
                return Some(ResultEntry { number, satisfied });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining).ok())
    }
}

impl FusedIterator for Matches {}

/// What a valid request produces.
#[derive(Debug, Clone)]
pub enum Outcome {
    Report(Report),
    Matches(Matches),
}

/// Single-number mode: evaluates all twelve properties of `number`.
pub fn report(number: u64) -> Result<Report> {
    Request::single(number).validate()?;
    Ok(Report {
        number,
        properties: Property::ALL.map(|property| (property, property.test(number))),
    })
}

/// Range mode: validates `request`, then returns a fresh scan over it.
pub fn search(request: &Request) -> Result<Matches> {
    let count = request.count.ok_or_else(|| QueryError::InvalidCount {
        input: String::new(),
        reason: FilterError::Missing,
    })?;
    request.validate()?;

    tracing::debug!(
        start = request.start,
        count,
        included = %request.included,
        excluded = %request.excluded,
        "scanning range"
    );
    Ok(Matches::new(request, count))
}

/// Answers `request` in whichever mode its `count` selects.
pub fn execute(request: &Request) -> Result<Outcome> {
    match request.count {
        None => report(request.start).map(Outcome::Report),
        Some(_) => search(request).map(Outcome::Matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(request: &Request) -> Vec<u64> {
        search(request).unwrap().map(|entry| entry.number).collect()
    }

    #[test]
    fn test_report_covers_every_property_in_order() {
        let report = report(7).unwrap();
        assert_eq!(report.number, 7);
        let order: Vec<Property> = report.properties.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, Property::ALL.to_vec());
        assert_eq!(report.satisfied(), evaluate(7));
    }

    #[test]
    fn test_report_rejects_zero() {
        assert_eq!(
            report(0).unwrap_err(),
            QueryError::InvalidNumber {
                input: "0".to_string(),
                reason: FilterError::Below(1),
            }
        );
    }

    #[test]
    fn test_single_mode_ignores_filters() {
        let request = Request::single(4)
            .include(Property::Even)
            .include(Property::Odd);
        assert!(request.validate().is_ok());
        assert!(matches!(execute(&request), Ok(Outcome::Report(_))));
    }

    #[test]
    fn test_zero_count_is_invalid() {
        assert!(matches!(
            search(&Request::range(1, 0)),
            Err(QueryError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_range_may_start_at_zero() {
        assert_eq!(numbers(&Request::range(0, 3)), vec![0, 1, 2]);
    }

    #[test]
    fn test_excluded_filters() {
        let request = Request::range(1, 4)
            .exclude(Property::Odd)
            .exclude(Property::Duck);
        assert_eq!(numbers(&request), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_multiple_included_filters() {
        let request = Request::range(1, 3)
            .include(Property::Even)
            .include(Property::Square);
        assert_eq!(numbers(&request), vec![4, 16, 36]);
    }

    #[test]
    fn test_entries_carry_satisfied_sets() {
        for entry in search(&Request::range(95, 10)).unwrap() {
            assert_eq!(entry.satisfied, evaluate(entry.number));
        }
    }

    #[test]
    fn test_scan_stops_at_u64_max() {
        let request = Request::range(u64::MAX - 1, 5);
        assert_eq!(numbers(&request), vec![u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn test_search_is_restartable() {
        let request = Request::range(10, 3).include(Property::Duck);
        assert_eq!(numbers(&request), numbers(&request));
    }

    #[test]
    fn test_conflicts_are_all_reported() {
        let request = Request::range(1, 1)
            .include(Property::Even)
            .include(Property::Odd)
            .include(Property::Happy)
            .exclude(Property::Happy)
            .exclude(Property::Sunny)
            .exclude(Property::Square);

        let Err(QueryError::Conflict { conflicts }) = request.validate() else {
            panic!("expected a conflict");
        };
        assert_eq!(
            conflicts,
            vec![
                Conflict(Filter::include(Property::Happy), Filter::exclude(Property::Happy)),
                Conflict(Filter::include(Property::Even), Filter::include(Property::Odd)),
                Conflict(Filter::exclude(Property::Square), Filter::exclude(Property::Sunny)),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_shapes() {
        let entry = search(&Request::range(7, 1)).unwrap().next().unwrap();
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"number":7,"satisfied":["buzz","palindromic","spy","jumping","odd","happy"]}"#
        );

        let report = serde_json::to_value(report(4).unwrap()).unwrap();
        assert_eq!(report["properties"]["square"], true);
        assert_eq!(report["properties"]["sad"], true);
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::include(Property::Spy).to_string(), "SPY");
        assert_eq!(Filter::exclude(Property::Spy).to_string(), "-SPY");
    }
}
