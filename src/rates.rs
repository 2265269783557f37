//! Category-keyed rate lookup with a required fallback
//!
//! Calculators that pick a rate by category (renovation type, asset class,
//! state) use this instead of an untyped map lookup.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct RateLookup<K> {
    rates: HashMap<K, f64>,
    fallback: f64,
}

impl<K: Eq + Hash> RateLookup<K> {
    pub fn new(fallback: f64) -> Self {
        Self {
            rates: HashMap::new(),
            fallback,
        }
    }

    /// Add or replace the rate for `key`
    pub fn with(mut self, key: K, rate: f64) -> Self {
        self.rates.insert(key, rate);
        self
    }

    pub fn from_entries<I>(entries: I, fallback: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            rates: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Rate for `key`, or the fallback when the key is unknown
    pub fn rate_for(&self, key: &K) -> f64 {
        self.rates.get(key).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
