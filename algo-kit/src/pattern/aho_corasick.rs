//! [Aho-Corasick]: simultaneous search for many patterns.
//!
//! [Aho-Corasick]: https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct State<T> {
    children: HashMap<T, usize>,
    fail: usize,
    /// Patterns ending here, longest first, including those inherited
    /// through failure links
    outputs: Vec<usize>,
}

impl<T> State<T> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            fail: ROOT,
            outputs: Vec::new(),
        }
    }
}

/// One occurrence of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    /// Index of the pattern in the list given to [`AhoCorasick::new`]
    pub pattern: usize,
    /// Start position in the text
    pub start: usize,
}

/// A pattern automaton: a trie of all patterns plus failure links.
///
/// The failure link of a state points at the longest proper suffix of its
/// string that is also a trie path, the multi-pattern generalisation of the
/// KMP prefix function. One pass over the text then reports every
/// occurrence of every pattern.
///
/// # Example
///
/// ```rust
/// use algo_kit::pattern::{AhoCorasick, Match};
///
/// let automaton = AhoCorasick::from_strs(&["he", "she", "his", "hers"]);
/// let found = automaton.find_all(b"ahishers");
/// assert_eq!(
///     found,
///     vec![
///         Match { pattern: 2, start: 1 },
///         Match { pattern: 1, start: 3 },
///         Match { pattern: 0, start: 4 },
///         Match { pattern: 3, start: 4 },
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AhoCorasick<T> {
    states: Vec<State<T>>,
    lengths: Vec<usize>,
}

impl<T: Hash + Eq + Clone> AhoCorasick<T> {
    /// Builds the automaton. Empty patterns are kept in the numbering but
    /// never match.
    pub fn new<P: AsRef<[T]>>(patterns: &[P]) -> Self {
        let mut states = vec![State::new()];
        let mut lengths = Vec::with_capacity(patterns.len());

        for (index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            lengths.push(pattern.len());
            if pattern.is_empty() {
                continue;
            }

            let mut current = ROOT;
            for symbol in pattern {
                current = match states[current].children.get(symbol) {
                    Some(&next) => next,
                    None => {
                        let next = states.len();
                        states.push(State::new());
                        states[current].children.insert(symbol.clone(), next);
                        next
                    }
                };
            }
            states[current].outputs.push(index);
        }

        link_failures(&mut states);
        tracing::debug!(
            patterns = patterns.len(),
            states = states.len(),
            "built aho-corasick automaton"
        );
        Self { states, lengths }
    }

    /// Number of patterns, empty ones included.
    pub fn pattern_count(&self) -> usize {
        self.lengths.len()
    }

    /// Every occurrence of every pattern, ordered by end position, then
    /// longer pattern first.
    pub fn find_all(&self, text: &[T]) -> Vec<Match> {
        let mut found = Vec::new();
        let mut current = ROOT;
        for (i, symbol) in text.iter().enumerate() {
            current = self.step(current, symbol);
            for &pattern in &self.states[current].outputs {
                found.push(Match {
                    pattern,
                    start: i + 1 - self.lengths[pattern],
                });
            }
        }
        found
    }

    /// Returns true if any pattern occurs in `text`.
    pub fn is_match(&self, text: &[T]) -> bool {
        let mut current = ROOT;
        text.iter().any(|symbol| {
            current = self.step(current, symbol);
            !self.states[current].outputs.is_empty()
        })
    }

    fn step(&self, mut current: usize, symbol: &T) -> usize {
        loop {
            if let Some(&next) = self.states[current].children.get(symbol) {
                return next;
            }
            if current == ROOT {
                return ROOT;
            }
            current = self.states[current].fail;
        }
    }
}

impl AhoCorasick<u8> {
    /// Builds a byte automaton from string patterns; match positions are
    /// byte offsets into the text passed as `text.as_bytes()`.
    pub fn from_strs(patterns: &[&str]) -> Self {
        let bytes: Vec<&[u8]> = patterns.iter().map(|p| p.as_bytes()).collect();
        Self::new(bytes.as_slice())
    }
}

/// Breadth-first pass setting each state's failure link and merging the
/// outputs of its failure target into its own.
fn link_failures<T: Hash + Eq + Clone>(states: &mut [State<T>]) {
    let mut queue: VecDeque<usize> = states[ROOT].children.values().copied().collect();

    while let Some(state) = queue.pop_front() {
        let edges: Vec<(T, usize)> = states[state]
            .children
            .iter()
            .map(|(symbol, &child)| (symbol.clone(), child))
            .collect();

        for (symbol, child) in edges {
            let mut fallback = states[state].fail;
            let fail = loop {
                if let Some(&next) = states[fallback].children.get(&symbol) {
                    break next;
                }
                if fallback == ROOT {
                    break ROOT;
                }
                fallback = states[fallback].fail;
            };

            states[child].fail = fail;
            let inherited = states[fail].outputs.clone();
            states[child].outputs.extend(inherited);
            queue.push_back(child);
        }
    }
}
