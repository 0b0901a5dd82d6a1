//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::{ClosureProblem, DpProblem};

/// A memoization cache with lazy, dependency-driven evaluation.
///
/// Asking for an index resolves its dependencies recursively, computes the
/// value once and stores it. Later requests for the same index are served
/// from the backend.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// Dependencies must form a DAG. A cycle recurses until the stack
/// overflows. Recursion depth equals the longest dependency chain.
///
/// # Example (closure-based)
///
/// ```rust
/// use algo_kit::dynamic::dp_cache::{DpCache, VecBackend};
///
/// let cache = DpCache::new(
///     VecBackend::new(),
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| {
///         if *n == 0 { 1 } else { (*n as u64) * deps[0] }
///     },
/// );
///
/// assert_eq!(cache.get(&5), 120);
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a cache over `backend` for the given problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it and its dependencies
    /// if necessary.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow is held while dependencies resolve.
        let deps = self.problem.deps(index);
        let dep_values: Vec<K> = deps.into_iter().map(|dep| self.get(&dep)).collect();

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .clone()
    }

    /// Number of values computed so far.
    pub fn computed(&self) -> usize {
        self.backend.borrow().len()
    }

    /// The problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consumes the cache, returning its backend.
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}

impl<I, K, B> DpCache<I, K, B, ClosureProblem<I, K, fn(&I) -> Vec<I>, fn(&I, Vec<K>) -> K>>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
{
    /// Creates a cache from a dependency function and a compute function.
    pub fn new<D, C>(
        backend: B,
        dep_fn: D,
        compute_fn: C,
    ) -> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
    where
        D: Fn(&I) -> Vec<I>,
        C: Fn(&I, Vec<K>) -> K,
    {
        DpCache::with_problem(backend, ClosureProblem::new(dep_fn, compute_fn))
    }
}
