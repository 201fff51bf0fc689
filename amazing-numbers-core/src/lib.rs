//! # Amazing Numbers Core
//!
//! Classifies natural numbers by twelve digit-based and arithmetic
//! properties, and answers requests of the form
//! *"the first `count` numbers from `start` that are X and not Y"*.
//!
//! ## Features
//! - **Property Registry** ([`properties`]) - a fixed table of properties,
//!   their predicates and which pairs can never co-occur
//! - **Query Engine** ([`query`]) - request validation, conflict detection
//!   and a lazy range scan
//! - **Input helpers** ([`utils`]) - token sanitizing filters and a terminal
//!   prompt for interactive drivers
//!
//! ## Example
//! ```rust
//! use amazing_numbers_core::{Property, QueryError, Request, search};
//!
//! let request = Request::range(1, 3).include(Property::Even).exclude(Property::Duck);
//! let found: Vec<u64> = search(&request).unwrap().map(|e| e.number).collect();
//! assert_eq!(found, vec![2, 4, 6]);
//!
//! let impossible = Request::range(1, 3).include(Property::Even).include(Property::Odd);
//! assert!(matches!(search(&impossible), Err(QueryError::Conflict { .. })));
//! ```
//!
//! ## Feature flags
//!
//! - `serde` - `Serialize` for [`Property`], [`PropertySet`], [`ResultEntry`]
//!   and [`Report`]

pub mod error;
pub mod properties;
pub mod query;
pub mod utils;

pub use error::{QueryError, Result};
pub use properties::{Property, PropertySet, evaluate, is_mutually_exclusive};
pub use query::{Matches, Outcome, Report, Request, ResultEntry, execute, report, search};

#[cfg(test)]
mod tests {
    #[test]
    fn test_manifest_leaves_cli_metadata_to_the_binary() {
        let manifest = include_str!("../Cargo.toml");
        assert!(!manifest.contains("command-line-utilities"));
        assert!(!manifest.contains("\"cli\""));
    }
}
