//! Primitive containers for the algo-kit library
//!
//! Standalone data structures, each with its own invariants, used directly by
//! callers and as building blocks by the algorithm routines in `algo-kit`:
//!
//! - [`heap`]: array-backed binary heap, max or min ordered
//! - [`bst`]: unbalanced binary search tree with owned subtrees
//! - [`trie`]: prefix tree over `char`
//! - [`disjoint_set`]: union-find with path compression and union by rank
//! - [`graph`]: adjacency-list graph shared by graph searches, spanning
//!   trees and shortest paths
//!
//! # Quick Example
//!
//! ```
//! use algo_collections::{DisjointSet, MinHeap};
//!
//! let mut heap: MinHeap<(u32, char)> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
//! assert_eq!(heap.pop(), Some((1, 'a')));
//!
//! let mut sets = DisjointSet::new(3);
//! sets.union(0, 2);
//! assert!(sets.connected(2, 0));
//! ```

pub mod bst;
pub mod disjoint_set;
mod error;
pub mod graph;
pub mod heap;
pub mod trie;

// Re-export public API
pub use bst::BinarySearchTree;
pub use disjoint_set::DisjointSet;
pub use error::CollectionError;
pub use graph::{Edge, Graph, WeightedEdge};
pub use heap::{BinaryHeap, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder};
pub use trie::Trie;
