use crate::properties::Property;
use crate::query::Conflict;
use crate::utils::FilterError;
use thiserror::Error;

/// Everything that can make a request unanswerable.
///
/// All variants are recoverable: the driver prints the message and asks
/// for the next request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("The first parameter should be a natural number or zero.")]
    InvalidNumber {
        input: String,
        #[source]
        reason: FilterError,
    },

    #[error("The second parameter should be a natural number.")]
    InvalidCount {
        input: String,
        #[source]
        reason: FilterError,
    },

    #[error("{}\nAvailable properties: {}", unknown_message(.tokens), available_properties())]
    UnknownProperty { tokens: Vec<String> },

    #[error(
        "The request contains mutually exclusive properties: {}\nThere are no numbers with these properties.",
        conflict_list(.conflicts)
    )]
    Conflict { conflicts: Vec<Conflict> },
}

pub type Result<T> = std::result::Result<T, QueryError>;

fn unknown_message(tokens: &[String]) -> String {
    match tokens {
        [single] => format!("The property [{}] is wrong.", single),
        many => format!("The properties [{}] are wrong.", many.join(", ")),
    }
}

fn conflict_list(conflicts: &[Conflict]) -> String {
    conflicts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `[BUZZ, DUCK, ..., SAD]`
pub fn available_properties() -> String {
    let names: Vec<&str> = Property::ALL.iter().map(|p| p.name()).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Filter;

    #[test]
    fn test_unknown_property_singular() {
        let err = QueryError::UnknownProperty {
            tokens: vec!["prime".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "The property [prime] is wrong.\nAvailable properties: \
             [BUZZ, DUCK, PALINDROMIC, GAPFUL, SPY, SQUARE, SUNNY, JUMPING, EVEN, ODD, HAPPY, SAD]"
        );
    }

    #[test]
    fn test_unknown_property_plural() {
        let err = QueryError::UnknownProperty {
            tokens: vec!["prime".to_string(), "-fizz".to_string()],
        };
        assert!(
            err.to_string()
                .starts_with("The properties [prime, -fizz] are wrong.\n")
        );
    }

    #[test]
    fn test_invalid_number_keeps_its_reason() {
        use std::error::Error as _;

        let err = QueryError::InvalidNumber {
            input: "-5".to_string(),
            reason: FilterError::Number(crate::utils::DesiredType::U64),
        };
        assert_eq!(
            err.to_string(),
            "The first parameter should be a natural number or zero."
        );
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("the value is not a natural number".to_string())
        );
    }

    #[test]
    fn test_conflict_lists_every_pair() {
        let err = QueryError::Conflict {
            conflicts: vec![
                Conflict(Filter::include(Property::Even), Filter::include(Property::Odd)),
                Conflict(Filter::include(Property::Sad), Filter::exclude(Property::Sad)),
            ],
        };
        assert_eq!(
            err.to_string(),
            "The request contains mutually exclusive properties: [EVEN, ODD], [SAD, -SAD]\n\
             There are no numbers with these properties."
        );
    }
}
