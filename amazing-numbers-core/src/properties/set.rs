use super::Property;
use std::fmt::{Debug, Display};

/// A set of [`Property`] values backed by a bitmask.
///
/// Iteration always follows the canonical property order, regardless of
/// insertion order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PropertySet {
    bits: u16,
}

impl PropertySet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    const fn bit(property: Property) -> u16 {
        1 << property as u16
    }

    /// Adds `property`. Returns `false` if it was already present.
    pub fn insert(&mut self, property: Property) -> bool {
        let fresh = !self.contains(property);
        self.bits |= Self::bit(property);
        fresh
    }

    pub fn contains(&self, property: Property) -> bool {
        self.bits & Self::bit(property) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if every property of `other` is also in `self`.
    pub fn is_superset(&self, other: &PropertySet) -> bool {
        self.bits & other.bits == other.bits
    }

    pub fn is_disjoint(&self, other: &PropertySet) -> bool {
        self.bits & other.bits == 0
    }

    pub fn intersection(&self, other: &PropertySet) -> PropertySet {
        PropertySet {
            bits: self.bits & other.bits,
        }
    }

    pub fn iter(&self) -> Iter {
        Iter {
            set: *self,
            next: 0,
        }
    }
}

/// Iterator over a [`PropertySet`], in canonical order.
#[derive(Debug, Clone)]
pub struct Iter {
    set: PropertySet,
    next: usize,
}

impl Iterator for Iter {
    type Item = Property;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(property) = Property::ALL.get(self.next).copied() {
            self.next += 1;
            if self.set.contains(property) {
                return Some(property);
            }
        }
        None
    }
}

impl IntoIterator for PropertySet {
    type Item = Property;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PropertySet {
    type Item = Property;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<T: IntoIterator<Item = Property>>(iter: T) -> Self {
        let mut set = PropertySet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Property> for PropertySet {
    fn extend<T: IntoIterator<Item = Property>>(&mut self, iter: T) {
        for property in iter {
            self.insert(property);
        }
    }
}

impl Debug for PropertySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as `[BUZZ, DUCK]`.
impl Display for PropertySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(Property::name).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PropertySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
