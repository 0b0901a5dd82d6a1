//! Huffman prefix codes.

use std::collections::BTreeMap;

use algo_collections::MinHeap;

#[derive(Debug, Clone)]
enum Node {
    Leaf(char),
    Internal { zero: usize, one: usize },
}

/// An optimal prefix code for a set of symbol frequencies.
///
/// Built by repeatedly merging the two least frequent subtrees, taken from
/// a [`MinHeap`]. Ties between equal frequencies are broken by creation
/// order (leaves in symbol order first, then merged nodes as they appear),
/// so the same input always yields the same code.
///
/// # Example
///
/// ```rust
/// use algo_kit::greedy::HuffmanCode;
///
/// let code = HuffmanCode::from_text("abracadabra").unwrap();
/// let bits = code.encode("abracadabra").unwrap();
/// assert_eq!(bits.len(), code.weighted_length() as usize);
/// assert_eq!(code.decode(&bits).unwrap(), "abracadabra");
/// ```
#[derive(Debug, Clone)]
pub struct HuffmanCode {
    nodes: Vec<Node>,
    root: usize,
    codes: BTreeMap<char, String>,
    frequencies: BTreeMap<char, u64>,
}

impl HuffmanCode {
    /// Builds a code from `(symbol, frequency)` pairs. Frequencies of a
    /// repeated symbol are summed.
    ///
    /// Returns `None` for empty input. A single symbol gets the code `"0"`.
    pub fn build(frequencies: &[(char, u64)]) -> Option<Self> {
        let mut merged: BTreeMap<char, u64> = BTreeMap::new();
        for &(symbol, freq) in frequencies {
            *merged.entry(symbol).or_default() += freq;
        }
        if merged.is_empty() {
            return None;
        }

        let mut nodes = Vec::with_capacity(2 * merged.len() - 1);
        let mut heap = MinHeap::with_capacity(merged.len());
        for (&symbol, &freq) in &merged {
            heap.push((freq, nodes.len()));
            nodes.push(Node::Leaf(symbol));
        }

        while heap.len() > 1 {
            let (Some((f0, zero)), Some((f1, one))) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push((f0.saturating_add(f1), nodes.len()));
            nodes.push(Node::Internal { zero, one });
        }
        let (_, root) = heap.pop()?;

        let mut codes = BTreeMap::new();
        let mut stack = vec![(root, String::new())];
        while let Some((index, prefix)) = stack.pop() {
            match nodes[index] {
                Node::Leaf(symbol) => {
                    let code = if prefix.is_empty() { "0".to_string() } else { prefix };
                    codes.insert(symbol, code);
                }
                Node::Internal { zero, one } => {
                    stack.push((one, format!("{prefix}1")));
                    stack.push((zero, prefix + "0"));
                }
            }
        }

        tracing::debug!(symbols = codes.len(), "built huffman code");
        Some(Self {
            nodes,
            root,
            codes,
            frequencies: merged,
        })
    }

    /// Builds a code from the character frequencies of `text`.
    pub fn from_text(text: &str) -> Option<Self> {
        let pairs: Vec<(char, u64)> = text.chars().map(|c| (c, 1)).collect();
        Self::build(&pairs)
    }

    /// Codeword for `symbol`.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// All codewords, by symbol.
    pub fn codes(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    /// Encodes `text` as a string of `'0'`/`'1'`. `None` if `text` contains a
    /// symbol outside the code.
    pub fn encode(&self, text: &str) -> Option<String> {
        text.chars().map(|c| self.code(c)).collect()
    }

    /// Decodes a bit string. `None` on a character other than `'0'`/`'1'`
    /// or a trailing partial codeword.
    pub fn decode(&self, bits: &str) -> Option<String> {
        let mut out = String::new();

        if let Node::Leaf(symbol) = self.nodes[self.root] {
            for bit in bits.chars() {
                if bit != '0' {
                    return None;
                }
                out.push(symbol);
            }
            return Some(out);
        }

        let mut index = self.root;
        for bit in bits.chars() {
            let Node::Internal { zero, one } = self.nodes[index] else {
                return None;
            };
            index = match bit {
                '0' => zero,
                '1' => one,
                _ => return None,
            };
            if let Node::Leaf(symbol) = self.nodes[index] {
                out.push(symbol);
                index = self.root;
            }
        }
        (index == self.root).then_some(out)
    }

    /// Total encoded length in bits: the sum of frequency times codeword
    /// length over all symbols.
    pub fn weighted_length(&self) -> u64 {
        self.frequencies
            .iter()
            .map(|(symbol, &freq)| {
                let len = self.codes.get(symbol).map_or(0, String::len) as u64;
                freq.saturating_mul(len)
            })
            .fold(0, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prefix_free(code: &HuffmanCode) -> bool {
        let words: Vec<&String> = code.codes().values().collect();
        words.iter().enumerate().all(|(i, a)| {
            words
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a.as_str()))
        })
    }

    #[test]
    fn test_classic_frequencies() {
        let freqs = [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];
        let code = HuffmanCode::build(&freqs).unwrap();
        assert!(is_prefix_free(&code));
        assert_eq!(code.weighted_length(), 224);
        assert_eq!(code.code('f').map(str::len), Some(1));
        assert_eq!(code.code('a').map(str::len), Some(4));
        assert_eq!(code.code('z'), None);
    }

    #[test]
    fn test_round_trip_text() {
        let text = "this is an example of a huffman tree";
        let code = HuffmanCode::from_text(text).unwrap();
        let bits = code.encode(text).unwrap();
        assert_eq!(bits.len() as u64, code.weighted_length());
        assert_eq!(code.decode(&bits).as_deref(), Some(text));
    }

    #[test]
    fn test_single_symbol() {
        let code = HuffmanCode::build(&[('x', 3)]).unwrap();
        assert_eq!(code.code('x'), Some("0"));
        assert_eq!(code.encode("xxx").as_deref(), Some("000"));
        assert_eq!(code.decode("00").as_deref(), Some("xx"));
        assert_eq!(code.decode("01"), None);
        assert_eq!(code.weighted_length(), 3);
    }

    #[test]
    fn test_empty_and_invalid_input() {
        assert!(HuffmanCode::build(&[]).is_none());
        assert!(HuffmanCode::from_text("").is_none());

        let code = HuffmanCode::build(&[('a', 1), ('b', 1), ('c', 2)]).unwrap();
        assert_eq!(code.encode("abd"), None);
        assert_eq!(code.decode("0x"), None);
        // c = "0", a = "10", b = "11": a lone "1" is a dangling prefix
        assert_eq!(code.code('c'), Some("0"));
        assert_eq!(code.decode("1"), None);
        assert_eq!(code.decode("10110").as_deref(), Some("abc"));
    }

    #[test]
    fn test_duplicate_symbols_are_summed() {
        let split = HuffmanCode::build(&[('a', 2), ('b', 3), ('a', 2)]).unwrap();
        let whole = HuffmanCode::build(&[('a', 4), ('b', 3)]).unwrap();
        assert_eq!(split.codes(), whole.codes());
        assert_eq!(split.weighted_length(), 7);
    }
}
