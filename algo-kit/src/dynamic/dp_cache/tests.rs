//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Simple problem with no dependencies for testing
struct NoDeps;

impl DpProblem<usize, i32> for NoDeps {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> i32 {
        (*n as i32) * 2
    }
}

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Steps for the Collatz sequence starting at `n` to reach 1
struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_basic_cache_creation_and_single_value() {
    let cache = DpCache::with_problem(VecBackend::new(), NoDeps);

    assert_eq!(cache.get(&5), 10);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&100), 200);
    assert_eq!(cache.computed(), 3);
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&5), 5);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
    assert_eq!(cache.computed(), 91);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    let compute_count = Rc::new(Cell::new(0));

    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                3 => 10,
                _ => 0,
            }
        }
    }

    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: compute_count.clone(),
        },
    );

    // D=10, B=20, C=30, A=50
    assert_eq!(cache.get(&0), 50);
    assert_eq!(compute_count.get(), 4);

    assert_eq!(cache.get(&0), 50);
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_vec_backend_get_or_insert() {
    let mut backend: VecBackend<i32> = VecBackend::new();

    assert_eq!(*backend.get_or_insert(5, || 42), 42);
    // cached value wins over the new closure
    assert_eq!(*backend.get_or_insert(5, || 999), 42);

    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&4), None);
    assert_eq!(backend.get(&10), None);

    assert_eq!(*backend.get_or_insert(10, || 100), 100);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.len(), 2);
}

#[test]
fn test_vec2d_backend_get_or_insert() {
    let mut backend: Vec2DBackend<u8> = Vec2DBackend::new(3, 4);
    assert!(backend.is_empty());

    assert_eq!(*backend.get_or_insert((2, 3), || 7), 7);
    assert_eq!(*backend.get_or_insert((2, 3), || 8), 7);
    assert_eq!(backend.get(&(0, 0)), None);
    assert_eq!(backend.get(&(2, 3)), Some(&7));
    assert_eq!(backend.len(), 1);
}

#[test]
#[should_panic(expected = "outside grid width")]
fn test_vec2d_backend_rejects_wide_column() {
    let backend: Vec2DBackend<u8> = Vec2DBackend::new(3, 4);
    let _ = backend.get(&(0, 4));
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();

    assert_eq!(*backend.get_or_insert("key1".to_string(), || 42), 42);
    assert_eq!(*backend.get_or_insert("key1".to_string(), || 999), 42);

    assert_eq!(backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(backend.get(&"key2".to_string()), None);
}

#[test]
fn test_hashmap_backend_with_cache() {
    struct StringLength;

    impl DpProblem<String, usize> for StringLength {
        fn deps(&self, s: &String) -> Vec<String> {
            if s.is_empty() {
                vec![]
            } else {
                vec![s[1..].to_string()]
            }
        }

        fn compute(&self, _s: &String, deps: Vec<usize>) -> usize {
            deps.first().map_or(0, |d| d + 1)
        }
    }

    let cache = DpCache::with_problem(HashMapBackend::new(), StringLength);
    assert_eq!(cache.get(&"hello".to_string()), 5);
    // every suffix, including the empty one
    assert_eq!(cache.computed(), 6);
    assert_eq!(cache.get(&"llo".to_string()), 3);
    assert_eq!(cache.computed(), 6);
}

#[test]
fn test_collatz_known_values() {
    let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);

    assert_eq!(cache.get(&1), 0);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&16), 4);
    assert_eq!(cache.get(&3), 7);
    assert_eq!(cache.get(&27), 111);
    assert_eq!(cache.get(&97), 118);
}

#[test]
fn test_closure_based_matches_trait_based() {
    let closure_cache = DpCache::new(
        VecBackend::new(),
        |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
        |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
    );
    let trait_cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    for n in 0..60 {
        assert_eq!(closure_cache.get(&n), trait_cache.get(&n));
    }
}

#[test]
fn test_into_backend_keeps_values() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
    cache.get(&10);
    let backend = cache.into_backend();
    assert_eq!(backend.get(&10), Some(&55));
    assert_eq!(backend.get(&7), Some(&13));
}
