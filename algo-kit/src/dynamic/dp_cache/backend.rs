//! Storage backends for the memoization cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for computed subproblem values.
///
/// A backend only remembers values; [`DpCache`](super::DpCache) decides when
/// to compute them. `get_or_insert` runs `compute` only for an index with no
/// stored value.
pub trait Backend<I, K> {
    /// Returns the stored value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the stored value for `index`, computing and storing it first
    /// if absent.
    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: I, compute: F) -> &K;

    /// Number of stored values.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense storage for `usize` indices starting at 0. Grows on demand.
#[derive(Debug, Clone)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    stored: usize,
}

impl<K> VecBackend<K> {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            stored: 0,
        }
    }

    /// Creates an empty backend with room for indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            stored: 0,
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: usize, compute: F) -> &K {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        let slot = &mut self.data[index];
        if slot.is_none() {
            self.stored += 1;
        }
        slot.get_or_insert_with(compute)
    }

    fn len(&self) -> usize {
        self.stored
    }
}

/// Dense storage for `(row, col)` indices in a fixed `rows x cols` grid.
///
/// # Panics
///
/// Indexing outside the grid panics, like slice indexing.
#[derive(Debug, Clone)]
pub struct Vec2DBackend<K> {
    data: Vec<Option<K>>,
    cols: usize,
    stored: usize,
}

impl<K> Vec2DBackend<K> {
    /// Creates an empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        data.resize_with(rows * cols, || None);
        Self {
            data,
            cols,
            stored: 0,
        }
    }

    fn offset(&self, (row, col): (usize, usize)) -> usize {
        assert!(col < self.cols, "column {col} outside grid width {}", self.cols);
        row * self.cols + col
    }
}

impl<K> Backend<(usize, usize), K> for Vec2DBackend<K> {
    fn get(&self, index: &(usize, usize)) -> Option<&K> {
        self.data[self.offset(*index)].as_ref()
    }

    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: (usize, usize), compute: F) -> &K {
        let offset = self.offset(index);
        let slot = &mut self.data[offset];
        if slot.is_none() {
            self.stored += 1;
        }
        slot.get_or_insert_with(compute)
    }

    fn len(&self) -> usize {
        self.stored
    }
}

/// Sparse storage for any hashable index.
#[derive(Debug, Clone)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: I, compute: F) -> &K {
        self.data.entry(index).or_insert_with(compute)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
