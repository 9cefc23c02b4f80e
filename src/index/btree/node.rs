//! B-tree node representation.

/// A single B-tree node.
///
/// # Layout
/// ```text
///            keys:   [ k0 | k1 | ... | kn-1 ]
///   children:  c0  c1   c2  ...  cn-1   cn        (internal nodes only)
/// ```
/// Every key in `c[i]` is greater than `k[i-1]` and less than `k[i]`.
/// Leaves have no children. Each child is exclusively owned by its parent.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Keys in strictly increasing order.
    pub(crate) keys: Vec<K>,

    /// Child subtrees; `keys.len() + 1` entries for internal nodes.
    pub(crate) children: Vec<Box<Node<K>>>,

    pub(crate) is_leaf: bool,
}

impl<K: Ord + Copy> Node<K> {
    /// Create an empty node.
    ///
    /// Storage grows with the keys actually held, so the degree never
    /// dictates an up-front allocation.
    pub(crate) fn new(is_leaf: bool) -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf,
        }
    }

    /// Keys stored in this node.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Child subtrees (empty for leaves).
    #[inline]
    pub fn children(&self) -> &[Box<Node<K>>] {
        &self.children
    }

    /// Check if the node holds `max_keys` keys and must be split before
    /// another key can enter it.
    #[inline]
    pub(crate) fn is_full(&self, max_keys: usize) -> bool {
        self.keys.len() >= max_keys
    }

    /// Locate `key` within this node.
    ///
    /// Returns `Ok(i)` if `keys[i] == key`, or `Err(i)` where `i` is the
    /// position of the first key greater than `key`. That is also the index
    /// of the child whose key range brackets `key`.
    #[inline]
    pub(crate) fn find(&self, key: &K) -> std::result::Result<usize, usize> {
        self.keys.binary_search(key)
    }

    /// Split the full child at `index`, promoting its median into `self`.
    ///
    /// With `t` the minimum degree, the child holds `2t - 1` keys. Afterwards
    /// it keeps the lower `t - 1`, a new right sibling at `index + 1` takes the
    /// upper `t - 1`, and the median lands in `self.keys[index]`.
    pub(crate) fn split_child(&mut self, index: usize, t: usize) {
        let child = &mut self.children[index];
        debug_assert_eq!(child.keys.len(), 2 * t - 1, "split of a non-full child");

        let mut right = Node::new(child.is_leaf);
        right.keys.extend(child.keys.drain(t..));
        if !child.is_leaf {
            right.children.extend(child.children.drain(t..));
        }
        let median = child.keys[t - 1];
        child.keys.truncate(t - 1);

        self.keys.insert(index, median);
        self.children.insert(index + 1, Box::new(right));
    }

    /// Insert into the subtree rooted here, which must not be full.
    ///
    /// Full children are split on the way down, so no split ever has to
    /// travel back up.
    pub(crate) fn insert_non_full(&mut self, key: K, t: usize) {
        let mut node = self;
        loop {
            let mut index = match node.find(&key) {
                // Already present; callers filter this out before descending
                Ok(_) => return,
                Err(index) => index,
            };

            if node.is_leaf {
                node.keys.insert(index, key);
                return;
            }

            if node.children[index].is_full(2 * t - 1) {
                node.split_child(index, t);
                tracing::trace!(position = index, "split full child");
                if key > node.keys[index] {
                    index += 1;
                }
            }
            node = &mut node.children[index];
        }
    }

    /// Append this subtree's keys to `out` in sorted order.
    pub(crate) fn collect_keys(&self, out: &mut Vec<K>) {
        if self.is_leaf {
            out.extend_from_slice(&self.keys);
            return;
        }
        for (child, key) in self.children.iter().zip(&self.keys) {
            child.collect_keys(out);
            out.push(*key);
        }
        if let Some(last) = self.children.last() {
            last.collect_keys(out);
        }
    }
}
