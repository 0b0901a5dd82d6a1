//! Array-backed binary heap with a pluggable ordering.
//!
//! The heap stores a complete binary tree in a `Vec` using the usual index
//! arithmetic: the parent of `i` is `(i - 1) / 2` and its children are
//! `2i + 1` and `2i + 2`. Every node dominates both of its children, where
//! "dominates" is `>` for a [`MaxHeap`] and `<` for a [`MinHeap`].
//!
//! The sift helpers are exposed as free functions over slices so that an
//! in-place heap sort can reuse them with an arbitrary comparator.
//!
//! # Example
//!
//! ```rust
//! use algo_collections::heap::{MaxHeap, MinHeap};
//!
//! let mut max: MaxHeap<i32> = [3, 1, 4, 1, 5].into_iter().collect();
//! assert_eq!(max.pop(), Some(5));
//! assert_eq!(max.peek(), Some(&4));
//!
//! let mut min = MinHeap::new();
//! min.push(7);
//! min.push(2);
//! assert_eq!(min.pop(), Some(2));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Ordering strategy for a [`BinaryHeap`].
///
/// `dominates(a, b)` returns true when `a` must sit above `b`.
pub trait HeapOrder {
    /// Returns true if `a` belongs strictly above `b` in the heap.
    fn dominates<T: Ord>(a: &T, b: &T) -> bool;
}

/// Largest element at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

/// Smallest element at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

impl HeapOrder for MaxOrder {
    fn dominates<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

impl HeapOrder for MinOrder {
    fn dominates<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

/// Index of the parent of node `i`. Must not be called with `i == 0`.
#[inline]
pub const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Index of the left child of node `i`.
#[inline]
pub const fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of node `i`.
#[inline]
pub const fn right(i: usize) -> usize {
    2 * i + 2
}

/// Moves `data[idx]` towards the root until its parent dominates it.
pub fn sift_up_by<T, F>(data: &mut [T], mut idx: usize, dominates: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while idx > 0 {
        let p = parent(idx);
        if dominates(&data[idx], &data[p]) {
            data.swap(idx, p);
            idx = p;
        } else {
            break;
        }
    }
}

/// Moves `data[idx]` towards the leaves until it dominates both children.
///
/// Only the prefix `data[..data.len()]` is considered part of the heap, so
/// callers shrinking a heap in place pass a shorter subslice.
pub fn sift_down_by<T, F>(data: &mut [T], mut idx: usize, dominates: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    loop {
        let (l, r) = (left(idx), right(idx));
        let mut top = idx;

        if l < len && dominates(&data[l], &data[top]) {
            top = l;
        }
        if r < len && dominates(&data[r], &data[top]) {
            top = r;
        }

        if top == idx {
            break;
        }
        data.swap(idx, top);
        idx = top;
    }
}

/// Rearranges `data` into a heap in linear time by sifting down every
/// internal node, from the last one back to the root.
pub fn heapify_by<T, F>(data: &mut [T], dominates: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() <= 1 {
        return;
    }
    let last_internal = parent(data.len() - 1);
    for i in (0..=last_internal).rev() {
        sift_down_by(data, i, dominates);
    }
}

/// A binary heap parameterised by its ordering.
pub struct BinaryHeap<T, O = MaxOrder> {
    data: Vec<T>,
    _order: PhantomData<O>,
}

/// A heap whose root is the greatest element.
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

/// A heap whose root is the least element.
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

impl<T: Ord, O: HeapOrder> BinaryHeap<T, O> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _order: PhantomData,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    /// Builds a heap from an arbitrary vector in *O*(*n*) time.
    pub fn from_vec(mut data: Vec<T>) -> Self {
        heapify_by(&mut data, &mut O::dominates);
        Self {
            data,
            _order: PhantomData,
        }
    }

    /// Inserts an element: append, then sift up.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up_by(&mut self.data, last, &mut O::dominates);
    }

    /// Removes and returns the root.
    ///
    /// The last element is swapped into the root, the vector shrinks by one
    /// and the new root is sifted down.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let root = self.data.pop();
        sift_down_by(&mut self.data, 0, &mut O::dominates);
        root
    }

    /// Pushes `value` then pops the root, in a single sift.
    ///
    /// Returns `value` itself when it would have become the root.
    pub fn push_pop(&mut self, value: T) -> T {
        match self.data.first() {
            Some(root) if O::dominates(root, &value) => {
                let root = std::mem::replace(&mut self.data[0], value);
                sift_down_by(&mut self.data, 0, &mut O::dominates);
                root
            }
            _ => value,
        }
    }

    /// Pops the root then pushes `value`. Returns `None` (and pushes) on an
    /// empty heap.
    pub fn replace_root(&mut self, value: T) -> Option<T> {
        if self.data.is_empty() {
            self.data.push(value);
            return None;
        }
        let root = std::mem::replace(&mut self.data[0], value);
        sift_down_by(&mut self.data, 0, &mut O::dominates);
        Some(root)
    }

    /// Returns the root without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Underlying array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the underlying array in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements sorted so that the
    /// dominant element comes last: ascending for a [`MaxHeap`], descending
    /// for a [`MinHeap`].
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (1..self.data.len()).rev() {
            self.data.swap(0, end);
            sift_down_by(&mut self.data[..end], 0, &mut O::dominates);
        }
        self.data
    }
}

impl<T: Ord, O: HeapOrder> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap").field("data", &self.data).finish()
    }
}

impl<T: Ord, O: HeapOrder> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord, O: HeapOrder> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
