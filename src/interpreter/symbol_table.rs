use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{interpreter::value::core::Number, util::hash::fnv1a};

/// Number of buckets of a fresh table.
pub const SYMBOL_TABLE_BASE_CAPACITY: usize = 64;

/// Largest ratio of symbols to buckets tolerated before the table doubles.
pub const LOAD_THRESHOLD: f64 = 0.6;

/// A named value, linked to the next symbol of the same bucket.
#[derive(Debug)]
pub struct Symbol {
    name:  String,
    value: Number,
    next:  Option<Box<Symbol>>,
}

impl Symbol {
    /// The variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored value.
    #[must_use]
    pub const fn value(&self) -> &Number {
        &self.value
    }
}

/// Variable storage: a chained hash table keyed by FNV-1a.
///
/// Buckets hold singly linked chains and new names are prepended to their
/// chain. When adding a name would push the load factor above
/// [`LOAD_THRESHOLD`], capacity doubles and every symbol is rehashed first.
/// `count` always equals the number of reachable symbols.
///
/// # Example
/// ```
/// use arbcalc::interpreter::{symbol_table::SymbolTable, value::core::Number};
///
/// let mut table = SymbolTable::new();
/// table.insert_or_update("x", &Number::from_i64(2));
/// table.insert_or_update("x", &Number::from_i64(5));
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get("x"), Some(&Number::from_i64(5)));
/// assert!(table.get("y").is_none());
/// ```
#[derive(Debug)]
pub struct SymbolTable {
    buckets: Vec<Option<Box<Symbol>>>,
    count:   usize,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates an empty table with [`SYMBOL_TABLE_BASE_CAPACITY`] buckets.
    #[must_use]
    pub fn new() -> Self {
        Self { buckets: empty_buckets(SYMBOL_TABLE_BASE_CAPACITY),
               count:   0, }
    }

    /// Stores `value` under `name` and returns a copy of what was stored.
    ///
    /// An existing symbol is overwritten in place and never moves. A new name
    /// may trigger a resize before it is linked at the head of its bucket.
    ///
    /// # Parameters
    /// - `name`: Variable name, copied into the table when new.
    /// - `value`: The value to store.
    ///
    /// # Returns
    /// The value now associated with `name`.
    pub fn insert_or_update(&mut self, name: &str, value: &Number) -> Number {
        let mut index = self.bucket_of(name);

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(symbol) = cursor {
            if symbol.name == name {
                symbol.value.clone_from(value);
                trace!(name, "variable updated");
                return symbol.value.clone();
            }
            cursor = symbol.next.as_deref_mut();
        }

        if self.exceeds_load(self.count + 1) {
            self.resize(self.capacity() * 2);
            index = self.bucket_of(name);
        }

        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Symbol { name: name.to_owned(),
                                                     value: value.clone(),
                                                     next }));
        self.count += 1;
        debug!(name, count = self.count, "variable defined");
        value.clone()
    }

    /// Looks up `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Number> {
        let mut cursor = self.buckets[self.bucket_of(name)].as_deref();
        while let Some(symbol) = cursor {
            if symbol.name == name {
                return Some(&symbol.value);
            }
            cursor = symbol.next.as_deref();
        }
        None
    }

    /// Returns `true` if `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes every symbol. Capacity is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            let mut next = bucket.take();
            while let Some(mut symbol) = next {
                next = symbol.next.take();
            }
        }
        debug!(capacity = self.capacity(), removed = self.count, "symbol table cleared");
        self.count = 0;
    }

    /// Iterates over `(name, value)` pairs in bucket order, newest first
    /// within a bucket.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { buckets: self.buckets.iter(),
               chain:   None,
               left:    self.count, }
    }

    /// Number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored symbols.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no symbol is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Moves every symbol into `capacity` fresh buckets.
    ///
    /// The symbols themselves are relinked, not copied. Chain order after a
    /// resize is unspecified.
    fn resize(&mut self, capacity: usize) {
        let old = std::mem::replace(&mut self.buckets, empty_buckets(capacity));
        for mut next in old {
            while let Some(mut symbol) = next {
                next = symbol.next.take();
                let index = self.bucket_of(&symbol.name);
                symbol.next = self.buckets[index].take();
                self.buckets[index] = Some(symbol);
            }
        }
        debug!(capacity, count = self.count, "symbol table resized");
    }

    #[allow(clippy::cast_precision_loss)]
    fn exceeds_load(&self, count: usize) -> bool {
        count as f64 > self.capacity() as f64 * LOAD_THRESHOLD
    }

    fn bucket_of(&self, name: &str) -> usize {
        fnv1a(name.as_bytes()) as usize % self.buckets.len()
    }
}

impl Drop for SymbolTable {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type IntoIter = Iter<'a>;
    type Item = (&'a str, &'a Number);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the symbols of a [`SymbolTable`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Option<Box<Symbol>>>,
    chain:   Option<&'a Symbol>,
    left:    usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Number);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(symbol) = self.chain {
                self.chain = symbol.next.as_deref();
                self.left -= 1;
                return Some((symbol.name(), symbol.value()));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

fn empty_buckets(capacity: usize) -> Vec<Option<Box<Symbol>>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
