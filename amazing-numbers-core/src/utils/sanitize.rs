//! # Token Sanitization & Validation
//!
//! Composable filters (`Sanitize`) for the raw tokens of a request line.
//! Filters run in order and short-circuit on the first failure, returning a
//! [`FilterError`] that says what went wrong.
//!
//! ## Features
//! - Type validation for the token kinds a request contains via [`DesiredType`]
//! - Lower bounds on numeric tokens with [`Sanitize::IsAtLeast`]
//!
//! ## Example
//! ```rust
//! use amazing_numbers_core::utils::{DesiredType, Sanitize};
//!
//! let count = Sanitize::execute(
//!     " 15 ",
//!     &[Sanitize::IsType(DesiredType::U64), Sanitize::IsAtLeast(1)],
//! );
//! assert_eq!(count.unwrap(), "15");
//!
//! let property = Sanitize::execute("-even", &[Sanitize::IsType(DesiredType::Property)]);
//! assert!(property.is_ok());
//! ```
use crate::properties::Property;
use thiserror::Error;

/// A validation filter applied to a single token.
///
/// - `IsType`: the token parses as the given [`DesiredType`].
/// - `IsAtLeast`: the token is an unsigned integer no smaller than the bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sanitize {
    IsType(DesiredType),
    IsAtLeast(u64),
}

/// Trait for token validation.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterError>;
}

/// Why a token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("the value is not a {0}")]
    Number(DesiredType),
    #[error("the value is not a {0}")]
    Property(DesiredType),
    #[error("the value is smaller than {0}")]
    Below(u64),
    #[error("no value was given")]
    Missing,
}

/// Validates that `$input` parses as `$t`, evaluating to `Ok(())` or `$err`.
///
/// # Example
/// ```rust,ignore
/// check_type!("42", u64, Err(FilterError::Number(DesiredType::U64)));
/// ```
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(_) => Ok(()),
            Err(_) => $err,
        }
    };
}

impl Sanitize {
    /// Executes all provided filters against `token`.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned token if all filters pass.
    pub fn execute(token: &str, filters: &[Sanitize]) -> Result<String, FilterError> {
        let clean = token.trim();

        for filter in filters {
            filter.validate(clean)?;
        }
        Ok(clean.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterError> {
        match self {
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::IsAtLeast(min) => match input.parse::<u64>() {
                Ok(value) if value >= *min => Ok(()),
                Ok(_) => Err(FilterError::Below(*min)),
                Err(_) => Err(FilterError::Number(DesiredType::U64)),
            },
        }
    }
}

/// The kind of value a token should hold.
///
/// - `U64`: a natural number or zero.
/// - `Property`: a property name, optionally prefixed with `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    U64,
    Property,
}

impl DesiredType {
    fn parse(&self, input: &str) -> Result<(), FilterError> {
        match self {
            DesiredType::U64 => {
                check_type!(input, u64, Err(FilterError::Number(DesiredType::U64)))
            }
            DesiredType::Property => check_type!(
                input.strip_prefix('-').unwrap_or(input),
                Property,
                Err(FilterError::Property(DesiredType::Property))
            ),
        }
    }
}

impl std::fmt::Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U64 => write!(f, "natural number"),
            Self::Property => write!(f, "property"),
        }
    }
}
