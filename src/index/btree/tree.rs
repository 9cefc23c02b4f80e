//! The B-tree index.

use std::fmt::Debug;

use tracing::trace;

use super::node::Node;
use crate::common::config::{max_keys, min_keys, DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
use crate::common::{Error, Result};

/// An in-memory B-tree of minimum degree `t` over unique keys.
///
/// # Capacity
/// Every node holds at most `2t - 1` keys. Every node except the root holds at
/// least `t - 1`. The root is an empty leaf while the tree is empty.
///
/// # Insertion
/// Insertion splits full nodes preemptively on the way down from the root. A
/// full root is split into a new root with two children, which is the only way
/// the tree grows taller, so all leaves stay at the same depth.
///
/// # Example
/// ```
/// use recordindex::BTreeIndex;
///
/// let mut index = BTreeIndex::new(3).unwrap();
/// assert!(index.insert(101));
/// assert!(!index.insert(101)); // already present
///
/// assert!(index.search(101));
/// assert!(!index.search(102));
/// ```
#[derive(Debug, Clone)]
pub struct BTreeIndex<K> {
    root: Box<Node<K>>,
    t: usize,
    len: usize,
}

impl<K: Ord + Copy + Debug> BTreeIndex<K> {
    /// Create an empty tree with minimum degree `t`.
    ///
    /// # Errors
    /// Returns `Error::InvalidMinDegree` if `t < 2`, or if `t` is so large
    /// that the node capacity `2t - 1` does not fit in a `usize`.
    pub fn new(t: usize) -> Result<Self> {
        if t < MIN_DEGREE_FLOOR || t.checked_mul(2).is_none() {
            return Err(Error::InvalidMinDegree(t));
        }
        Ok(Self {
            root: Box::new(Node::new(true)),
            t,
            len: 0,
        })
    }

    /// The minimum degree this tree was built with.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.t
    }

    /// Number of keys in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; a tree whose root is a leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(child) = node.children.first() {
            node = child;
            height += 1;
        }
        height
    }

    /// The root node, for structural inspection.
    #[inline]
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Check whether `key` is present.
    ///
    /// Each level is binary searched. A match ends the search at once, and a
    /// miss at a leaf means the key is absent.
    pub fn search(&self, key: K) -> bool {
        let mut node = &self.root;
        loop {
            match node.find(&key) {
                Ok(_) => return true,
                Err(_) if node.is_leaf => return false,
                Err(index) => node = &node.children[index],
            }
        }
    }

    /// Insert `key` into the tree.
    ///
    /// Returns `true` if the key was added, or `false` if it was already
    /// present. A duplicate leaves the tree structurally unchanged.
    pub fn insert(&mut self, key: K) -> bool {
        if self.search(key) {
            return false;
        }

        let t = self.t;
        if self.root.is_full(max_keys(t)) {
            let new_root = Box::new(Node::new(false));
            let old_root = std::mem::replace(&mut self.root, new_root);
            self.root.children.push(old_root);
            self.root.split_child(0, t);
            trace!(height = self.height(), "split root");
        }
        self.root.insert_non_full(key, t);
        self.len += 1;
        true
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_keys(&mut out);
        out
    }

    /// Key sets of every node, grouped by depth (root first).
    ///
    /// Each inner `Vec<K>` is one node. Nodes within a level appear left to
    /// right.
    pub fn levels(&self) -> Vec<Vec<Vec<K>>> {
        let mut levels = Vec::new();
        let mut current: Vec<&Node<K>> = vec![self.root.as_ref()];
        while !current.is_empty() {
            levels.push(current.iter().map(|node| node.keys.clone()).collect());
            current = current
                .into_iter()
                .flat_map(|node| node.children.iter().map(|child| child.as_ref()))
                .collect();
        }
        levels
    }

    /// Verify every structural invariant of the tree.
    ///
    /// Checks key ordering within and across nodes, child counts, per-node
    /// capacity bounds, uniform leaf depth, and the cached key count.
    ///
    /// # Errors
    /// Returns `Error::InvariantViolation` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.root.keys.is_empty() && !self.root.is_leaf {
            return Err(violation("empty root must be a leaf".to_string()));
        }
        if self.root.keys.len() > max_keys(self.t) {
            return Err(violation(format!(
                "root holds {} keys, capacity is {}",
                self.root.keys.len(),
                max_keys(self.t)
            )));
        }

        let mut leaf_depth = None;
        let count = self.validate_node(&self.root, 0, None, None, &mut leaf_depth)?;
        if count != self.len {
            return Err(violation(format!(
                "tree records {} keys but holds {}",
                self.len, count
            )));
        }
        Ok(())
    }

    /// Recursively validate the subtree at `node`, whose keys must lie strictly
    /// between `lower` and `upper`. Returns the number of keys in the subtree.
    fn validate_node(
        &self,
        node: &Node<K>,
        depth: usize,
        lower: Option<K>,
        upper: Option<K>,
        leaf_depth: &mut Option<usize>,
    ) -> Result<usize> {
        let keys = &node.keys;

        if depth > 0 && (keys.len() < min_keys(self.t) || keys.len() > max_keys(self.t)) {
            return Err(violation(format!(
                "node {:?} at depth {} holds {} keys, allowed range is {}..={}",
                keys,
                depth,
                keys.len(),
                min_keys(self.t),
                max_keys(self.t)
            )));
        }
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(violation(format!("node {:?} keys are not strictly increasing", keys)));
        }
        if let (Some(lower), Some(first)) = (lower, keys.first()) {
            if *first <= lower {
                return Err(violation(format!("node {:?} has a key not above {:?}", keys, lower)));
            }
        }
        if let (Some(upper), Some(last)) = (upper, keys.last()) {
            if *last >= upper {
                return Err(violation(format!("node {:?} has a key not below {:?}", keys, upper)));
            }
        }

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(violation(format!("leaf {:?} has children", keys)));
            }
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(violation(format!(
                        "leaf {:?} at depth {}, expected {}",
                        keys, depth, expected
                    )));
                }
                Some(_) => {}
            }
            return Ok(keys.len());
        }

        if node.children.len() != keys.len() + 1 {
            return Err(violation(format!(
                "internal node {:?} has {} children, expected {}",
                keys,
                node.children.len(),
                keys.len() + 1
            )));
        }

        let mut count = keys.len();
        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(keys[i - 1]) };
            let child_upper = if i == keys.len() { upper } else { Some(keys[i]) };
            count += self.validate_node(child, depth + 1, child_lower, child_upper, leaf_depth)?;
        }
        Ok(count)
    }
}

impl<K: Ord + Copy + Debug> Default for BTreeIndex<K> {
    fn default() -> Self {
        Self {
            root: Box::new(Node::new(true)),
            t: DEFAULT_MIN_DEGREE,
            len: 0,
        }
    }
}

fn violation(message: String) -> Error {
    Error::InvariantViolation(message)
}
