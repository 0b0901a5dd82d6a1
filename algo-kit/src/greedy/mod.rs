//! Greedy algorithms.
//!
//! Each routine commits to a locally optimal choice at every step; the
//! greedy-choice property that makes this safe holds for every problem
//! here except coin change, which is checked at runtime.

mod coins;
mod graph;
mod huffman;
mod scheduling;

pub use coins::{greedy_coin_change, is_canonical_system};
pub use graph::{ShortestPaths, SpanningTree, dijkstra, kruskal, prim};
pub use huffman::HuffmanCode;
pub use scheduling::{
    Activity, FractionalItem, Job, JobSchedule, activity_selection, fractional_knapsack,
    job_sequencing,
};
