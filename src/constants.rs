//! Named constants which may appear in expressions in place of a number.

use alloc::{collections::BTreeMap, string::{String, ToString}};

/// A mapping from names to values, consulted while tokenizing.
///
/// The table is an ordinary value: build one, add entries, then pass it to
/// [parse_with_constants](crate::parse_with_constants). Nothing in this crate keeps a shared table
/// around between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTable {
    values: BTreeMap<String, f64>,
}

impl ConstantTable {
    /// A table with no constants at all.
    pub fn empty() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Adds a constant, replacing any existing constant with the same name.
    pub fn insert(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    /// Builder-style version of [insert](#method.insert).
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates over the constants in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for ConstantTable {
    /// A table containing `pi` and `e`.
    fn default() -> Self {
        Self::empty()
            .with("pi", core::f64::consts::PI)
            .with("e", core::f64::consts::E)
    }
}
