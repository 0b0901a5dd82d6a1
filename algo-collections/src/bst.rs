//! Unbalanced binary search tree with exclusively owned subtrees.
//!
//! Every key in a left subtree is less than its node's key, and every key in
//! a right subtree is greater. Duplicate keys are rejected. All traversals
//! and the destructor are iterative, so a degenerate (list-shaped) tree
//! never exhausts the call stack.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(key: T) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// A binary search tree holding unique keys.
///
/// # Example
///
/// ```rust
/// use algo_collections::bst::BinarySearchTree;
///
/// let mut tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40].into_iter().collect();
/// assert!(tree.contains(&40));
/// assert!(tree.remove(&30));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![20, 40, 50, 70]);
/// ```
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key`, returning false if it was already present.
    pub fn insert(&mut self, key: T) -> bool {
        let link = find_link(&mut self.root, &key);
        if link.is_some() {
            return false;
        }
        *link = Some(Node::leaf(key));
        self.len += 1;
        true
    }

    /// Returns true if `key` is stored in the tree.
    pub fn contains(&self, key: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes `key`, returning false if it was absent.
    ///
    /// A node with two children takes over the key of its in-order
    /// successor (the minimum of its right subtree), which is then detached
    /// from that subtree.
    pub fn remove(&mut self, key: &T) -> bool {
        let link = find_link(&mut self.root, key);
        let Some(mut node) = link.take() else {
            return false;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = detach_min(&mut right) {
                    node.key = successor;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    /// Smallest key.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(next) = node.left.as_deref() {
            node = next;
        }
        Some(&node.key)
    }

    /// Largest key.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(next) = node.right.as_deref() {
            node = next;
        }
        Some(&node.key)
    }

    /// Greatest key less than or equal to `key`.
    pub fn floor(&self, key: &T) -> Option<&T> {
        let mut best = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => {
                    best = Some(&node.key);
                    cursor = node.right.as_deref();
                }
            }
        }
        best
    }

    /// Least key greater than or equal to `key`.
    pub fn ceil(&self, key: &T) -> Option<&T> {
        let mut best = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => {
                    best = Some(&node.key);
                    cursor = node.left.as_deref();
                }
            }
        }
        best
    }
}

impl<T> BinarySearchTree<T> {
    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// In-order (sorted) iterator over the keys.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Keys in pre-order (node, left, right).
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Keys in post-order (left, right, node).
    pub fn post_order(&self) -> Vec<&T> {
        // Reverse of a (node, right, left) pre-order walk.
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.key);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }

    /// Keys level by level, left to right.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(&node.key);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}

/// Walks down from `link` and returns the link that holds `key`, or the
/// empty link where `key` would be inserted.
fn find_link<'a, T: Ord>(mut link: &'a mut Link<T>, key: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };
        link = match (ordering, link) {
            (Ordering::Equal, link) => return link,
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Unlinks the leftmost node under `link` and returns its key, splicing its
/// right subtree into its place.
fn detach_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        link = &mut link.as_mut()?.left;
    }
    let node = link.take()?;
    let Node { key, right, .. } = *node;
    *link = right;
    Some(key)
}

/// In-order iterator returned by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut cursor: Option<&'a Node<T>>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    fn keys(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn test_insert_and_in_order() {
        let tree = sample();
        assert_eq!(tree.len(), 7);
        assert_eq!(keys(&tree), vec![20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut tree = sample();
        assert!(!tree.insert(40));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = sample();
        assert!(tree.remove(&20));
        assert!(!tree.contains(&20));
        assert_eq!(keys(&tree), vec![30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = sample();
        tree.remove(&20);
        assert!(tree.remove(&30));
        assert_eq!(keys(&tree), vec![40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = sample();
        assert!(tree.remove(&50));
        assert_eq!(tree.pre_order().first(), Some(&&60));
        assert_eq!(keys(&tree), vec![20, 30, 40, 60, 70, 80]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_insert_then_remove_every_key() {
        let order = [8, 3, 10, 1, 6, 14, 4, 7, 13];
        let mut tree: BinarySearchTree<i32> = order.into_iter().collect();
        assert_eq!(keys(&tree), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
        for (removed, key) in order.iter().enumerate() {
            assert!(tree.remove(key));
            assert!(!tree.contains(key));
            assert_eq!(tree.len(), order.len() - removed - 1);
            for rest in &order[removed + 1..] {
                assert!(tree.contains(rest));
            }
        }
        assert!(tree.is_empty());
        assert!(tree.insert(5));
        assert_eq!(keys(&tree), vec![5]);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = sample();
        assert!(!tree.remove(&55));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_min_max_floor_ceil() {
        let tree = sample();
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));
        assert_eq!(tree.floor(&55), Some(&50));
        assert_eq!(tree.ceil(&55), Some(&60));
        assert_eq!(tree.floor(&10), None);
        assert_eq!(tree.ceil(&90), None);
        assert_eq!(tree.floor(&70), Some(&70));
    }

    #[test]
    fn test_traversal_orders() {
        let tree = sample();
        assert_eq!(tree.pre_order(), vec![&50, &30, &20, &40, &70, &60, &80]);
        assert_eq!(tree.post_order(), vec![&20, &40, &30, &60, &80, &70, &50]);
        assert_eq!(tree.level_order(), vec![&50, &30, &70, &20, &40, &60, &80]);
    }

    #[test]
    fn test_height() {
        assert_eq!(BinarySearchTree::<i32>::new().height(), 0);
        assert_eq!(sample().height(), 3);
        let chain: BinarySearchTree<i32> = (0..10).collect();
        assert_eq!(chain.height(), 10);
    }

    #[test]
    fn test_degenerate_tree() {
        let chain: BinarySearchTree<u32> = (0..5_000).collect();
        assert_eq!(chain.len(), 5_000);
        assert_eq!(chain.height(), 5_000);
        assert_eq!(chain.max(), Some(&4_999));
        assert_eq!(chain.iter().count(), 5_000);
        drop(chain);
    }
}
