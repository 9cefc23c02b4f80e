//! Diagnostic rendering of a [`BTreeIndex`].
//!
//! The tree is printed one level per line, root first, with each node's keys
//! in brackets:
//! ```text
//! Level 0: [12]
//! Level 1: [5 6 7 10] [17 20 30]
//! ```
//! The layout is meant for people. Tests should inspect
//! [`BTreeIndex::levels`] instead.

use std::fmt::{self, Debug, Display};

use super::tree::BTreeIndex;

impl<K: Ord + Copy + Debug + Display> BTreeIndex<K> {
    /// Render the tree structure level by level.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl<K: Ord + Copy + Debug + Display> Display for BTreeIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Level 0: [] (0 keys)");
        }

        for (depth, level) in self.levels().iter().enumerate() {
            if depth > 0 {
                writeln!(f)?;
            }
            write!(f, "Level {}:", depth)?;
            for node in level {
                write!(f, " [")?;
                for (i, key) in node.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", key)?;
                }
                write!(f, "]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_tree() {
        let tree: BTreeIndex<i32> = BTreeIndex::new(3).unwrap();
        let out = tree.display();
        assert!(out.contains("0 keys"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_display_single_leaf() {
        let mut tree = BTreeIndex::new(3).unwrap();
        for k in [20, 10] {
            tree.insert(k);
        }
        assert_eq!(tree.display(), "Level 0: [10 20]");
    }

    #[test]
    fn test_display_one_line_per_level() {
        let mut tree = BTreeIndex::new(3).unwrap();
        for k in 1..=6 {
            tree.insert(k);
        }
        assert_eq!(tree.display(), "Level 0: [3]\nLevel 1: [1 2] [4 5 6]");
        assert_eq!(tree.display().lines().count(), tree.height());
    }
}
