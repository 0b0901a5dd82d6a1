//! Tunables for routines that have more than one reasonable policy.
//!
//! Every type here has a `Default` and builder-style `with_*` setters, and
//! is passed by value into the `*_with` variant of the routine it tunes.

/// Pivot selection for quick sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPolicy {
    /// Median of the first, middle and last elements
    #[default]
    MedianOfThree,
    /// Uniformly random pivot from a generator seeded with the given value,
    /// so runs are reproducible
    Seeded(u64),
}

/// Parameters of the polynomial rolling hash used by Rabin-Karp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    /// Polynomial base; symbols are treated as digits in this base
    pub base: u64,
    /// Prime modulus
    pub modulus: u64,
}

impl Default for RollingHash {
    fn default() -> Self {
        Self {
            base: 256,
            modulus: 1_000_000_007,
        }
    }
}

impl RollingHash {
    /// Sets the polynomial base.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the modulus.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }
}

/// Resource limits for the backtracking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Maximum number of search-tree nodes to visit; `None` is unlimited
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    /// No limit on the search.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Stops the search after `max_nodes` nodes.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub(crate) fn exhausted(&self, nodes_visited: u64) -> bool {
        self.max_nodes.is_some_and(|max| nodes_visited >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PivotPolicy::default(), PivotPolicy::MedianOfThree);
        assert_eq!(RollingHash::default().modulus, 1_000_000_007);
        assert_eq!(SearchLimits::unlimited().max_nodes, None);
    }

    #[test]
    fn test_builders() {
        let hash = RollingHash::default().with_base(31).with_modulus(101);
        assert_eq!(hash, RollingHash { base: 31, modulus: 101 });

        let limits = SearchLimits::unlimited().with_max_nodes(10);
        assert!(!limits.exhausted(9));
        assert!(limits.exhausted(10));
        assert!(!SearchLimits::unlimited().exhausted(u64::MAX));
    }
}
