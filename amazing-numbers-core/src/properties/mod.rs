//! # Property Registry
//!
//! The closed set of twelve number properties, each described by an
//! immutable [`PropertyDef`] record in a static table: its name, its
//! predicate, and the properties it can never co-occur with.
//!
//! Lookups are data driven. [`Property::test`] and
//! [`Property::is_mutually_exclusive_with`] index the table instead of
//! branching per property, so adding a property means adding one row.
//!
//! ## Example
//! ```rust
//! use amazing_numbers_core::properties::{Property, evaluate};
//!
//! let satisfied = evaluate(7);
//! assert!(satisfied.contains(Property::Buzz));
//! assert!(satisfied.contains(Property::Odd));
//! assert!(satisfied.contains(Property::Happy));
//! assert!(Property::Even.is_mutually_exclusive_with(Property::Odd));
//! ```

mod predicates;
mod set;

pub use set::{Iter, PropertySet};

use crate::error::QueryError;
use std::{fmt::Display, str::FromStr};

/// One of the twelve supported properties, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Property {
    Buzz,
    Duck,
    Palindromic,
    Gapful,
    Spy,
    Square,
    Sunny,
    Jumping,
    Even,
    Odd,
    Happy,
    Sad,
}

/// Registry record backing a [`Property`].
pub struct PropertyDef {
    pub property: Property,
    pub name: &'static str,
    pub label: &'static str,
    pub predicate: fn(u64) -> bool,
    pub exclusive_with: &'static [Property],
}

/// Indexed by `Property as usize`.
static REGISTRY: [PropertyDef; Property::COUNT] = [
    PropertyDef {
        property: Property::Buzz,
        name: "BUZZ",
        label: "buzz",
        predicate: predicates::is_buzz,
        exclusive_with: &[],
    },
    PropertyDef {
        property: Property::Duck,
        name: "DUCK",
        label: "duck",
        predicate: predicates::is_duck,
        exclusive_with: &[Property::Spy],
    },
    PropertyDef {
        property: Property::Palindromic,
        name: "PALINDROMIC",
        label: "palindromic",
        predicate: predicates::is_palindromic,
        exclusive_with: &[],
    },
    PropertyDef {
        property: Property::Gapful,
        name: "GAPFUL",
        label: "gapful",
        predicate: predicates::is_gapful,
        exclusive_with: &[],
    },
    PropertyDef {
        property: Property::Spy,
        name: "SPY",
        label: "spy",
        predicate: predicates::is_spy,
        exclusive_with: &[Property::Duck],
    },
    PropertyDef {
        property: Property::Square,
        name: "SQUARE",
        label: "square",
        predicate: predicates::is_square,
        exclusive_with: &[Property::Sunny],
    },
    PropertyDef {
        property: Property::Sunny,
        name: "SUNNY",
        label: "sunny",
        predicate: predicates::is_sunny,
        exclusive_with: &[Property::Square],
    },
    PropertyDef {
        property: Property::Jumping,
        name: "JUMPING",
        label: "jumping",
        predicate: predicates::is_jumping,
        exclusive_with: &[],
    },
    PropertyDef {
        property: Property::Even,
        name: "EVEN",
        label: "even",
        predicate: predicates::is_even,
        exclusive_with: &[Property::Odd],
    },
    PropertyDef {
        property: Property::Odd,
        name: "ODD",
        label: "odd",
        predicate: predicates::is_odd,
        exclusive_with: &[Property::Even],
    },
    PropertyDef {
        property: Property::Happy,
        name: "HAPPY",
        label: "happy",
        predicate: predicates::is_happy,
        exclusive_with: &[Property::Sad],
    },
    PropertyDef {
        property: Property::Sad,
        name: "SAD",
        label: "sad",
        predicate: predicates::is_sad,
        exclusive_with: &[Property::Happy],
    },
];

impl Property {
    pub const COUNT: usize = 12;

    /// Every property, in canonical order.
    pub const ALL: [Property; Property::COUNT] = [
        Property::Buzz,
        Property::Duck,
        Property::Palindromic,
        Property::Gapful,
        Property::Spy,
        Property::Square,
        Property::Sunny,
        Property::Jumping,
        Property::Even,
        Property::Odd,
        Property::Happy,
        Property::Sad,
    ];

    /// The registry record for this property.
    pub fn def(self) -> &'static PropertyDef {
        &REGISTRY[self as usize]
    }

    /// Upper-case name, as typed in requests (`EVEN`).
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Lower-case label, as printed in reports (`even`).
    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// Returns `true` if `n` has this property.
    pub fn test(self, n: u64) -> bool {
        (self.def().predicate)(n)
    }

    /// Returns `true` if no number can have both `self` and `other`.
    ///
    /// Symmetric, and never true for a property paired with itself.
    pub fn is_mutually_exclusive_with(self, other: Property) -> bool {
        self.def().exclusive_with.contains(&other)
    }

    /// The property whose name matches `token`, ignoring case.
    fn lookup(token: &str) -> Option<Property> {
        REGISTRY
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(token))
            .map(|def| def.property)
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Property {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::lookup(s.trim()).ok_or_else(|| QueryError::UnknownProperty {
            tokens: vec![s.to_string()],
        })
    }
}

/// Every property satisfied by `n`, in canonical order.
pub fn evaluate(n: u64) -> PropertySet {
    Property::ALL
        .into_iter()
        .filter(|property| property.test(n))
        .collect()
}

/// Free-function form of [`Property::is_mutually_exclusive_with`].
pub fn is_mutually_exclusive(a: Property, b: Property) -> bool {
    a.is_mutually_exclusive_with(b)
}
