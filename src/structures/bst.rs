//! Binary search tree with owned nodes.
//!
//! Variables:
//!   root : Tree<T>  - Option<Box<Node>>, ordered left < node < right
//!   H    : height   - O(log N) balanced, O(N) degenerate
//!
//! Equations:
//!   insert / contains / remove / min / max     O(H)
//!   inorder()                                  O(N), sorted output
//!   range_query(lo, hi)                        O(H + matches)

use std::cmp::Ordering;

struct Node<T> {
    val: T,
    left: Tree<T>,
    right: Tree<T>,
}

type Tree<T> = Option<Box<Node<T>>>;

pub struct Bst<T> {
    root: Tree<T>,
    len: usize,
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `val`. False when already present (duplicates rejected).
    pub fn insert(&mut self, val: T) -> bool {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = match val.cmp(&node.val) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *cur = Some(Box::new(Node {
            val,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    pub fn contains(&self, val: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match val.cmp(&node.val) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn min(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(&cur.val)
    }

    pub fn max(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.val)
    }

    /// Remove `val`. A two-child node is replaced by its inorder
    /// successor (minimum of the right subtree). False if absent.
    pub fn remove(&mut self, val: &T) -> bool {
        let removed = Self::remove_from(&mut self.root, val);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(tree: &mut Tree<T>, val: &T) -> bool {
        let ordering = match tree.as_ref() {
            None => return false,
            Some(node) => val.cmp(&node.val),
        };
        match ordering {
            Ordering::Less => match tree.as_mut() {
                Some(node) => Self::remove_from(&mut node.left, val),
                None => false,
            },
            Ordering::Greater => match tree.as_mut() {
                Some(node) => Self::remove_from(&mut node.right, val),
                None => false,
            },
            Ordering::Equal => {
                if let Some(mut node) = tree.take() {
                    *tree = match (node.left.take(), node.right.take()) {
                        (None, None) => None,
                        (Some(l), None) => Some(l),
                        (None, Some(r)) => Some(r),
                        (Some(l), Some(r)) => {
                            let (successor, rest) = Self::detach_min(r);
                            Some(Box::new(Node {
                                val: successor,
                                left: Some(l),
                                right: rest,
                            }))
                        }
                    };
                }
                true
            }
        }
    }

    /// Split the minimum value out of a subtree, returning it along with
    /// the remaining subtree.
    fn detach_min(mut node: Box<Node<T>>) -> (T, Tree<T>) {
        match node.left.take() {
            None => (node.val, node.right),
            Some(left) => {
                let (min_val, rest) = Self::detach_min(left);
                node.left = rest;
                (min_val, Some(node))
            }
        }
    }

    /// Values in sorted order.
    pub fn inorder(&self) -> Vec<&T> {
        fn walk<'a, T>(tree: &'a Tree<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = tree {
                walk(&node.left, out);
                out.push(&node.val);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// Values in `[lo, hi]` in sorted order. Subtrees entirely outside
    /// the range are pruned.
    pub fn range_query(&self, lo: &T, hi: &T) -> Vec<&T> {
        fn walk<'a, T: Ord>(tree: &'a Tree<T>, lo: &T, hi: &T, out: &mut Vec<&'a T>) {
            if let Some(node) = tree {
                if node.val > *lo {
                    walk(&node.left, lo, hi, out);
                }
                if node.val >= *lo && node.val <= *hi {
                    out.push(&node.val);
                }
                if node.val < *hi {
                    walk(&node.right, lo, hi, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, lo, hi, &mut out);
        out
    }

    /// Whether the ordering invariant holds everywhere. Checks each node
    /// against the (min, max) window inherited from its ancestors.
    pub fn is_valid(&self) -> bool {
        fn check<T: Ord>(tree: &Tree<T>, lo: Option<&T>, hi: Option<&T>) -> bool {
            match tree {
                None => true,
                Some(node) => {
                    if lo.is_some_and(|l| node.val <= *l) || hi.is_some_and(|h| node.val >= *h) {
                        return false;
                    }
                    check(&node.left, lo, Some(&node.val)) && check(&node.right, Some(&node.val), hi)
                }
            }
        }
        check(&self.root, None, None)
    }

    /// The k-th smallest value, 1-based.
    pub fn kth_smallest(&self, k: usize) -> Option<&T> {
        fn walk<'a, T>(tree: &'a Tree<T>, remaining: &mut usize) -> Option<&'a T> {
            let node = tree.as_deref()?;
            if let Some(found) = walk(&node.left, remaining) {
                return Some(found);
            }
            *remaining -= 1;
            if *remaining == 0 {
                return Some(&node.val);
            }
            walk(&node.right, remaining)
        }
        if k == 0 || k > self.len {
            return None;
        }
        let mut remaining = k;
        walk(&self.root, &mut remaining)
    }

    /// Value of the lowest common ancestor of `a` and `b`. Descends while
    /// both targets fall on the same side; both must be present.
    pub fn lowest_common_ancestor(&self, a: &T, b: &T) -> Option<&T> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let mut cur = self.root.as_deref()?;
        loop {
            if *a < cur.val && *b < cur.val {
                cur = cur.left.as_deref()?;
            } else if *a > cur.val && *b > cur.val {
                cur = cur.right.as_deref()?;
            } else {
                return Some(&cur.val);
            }
        }
    }
}

impl<T: Ord + Clone> Bst<T> {
    pub fn from_slice(values: &[T]) -> Self {
        let mut bst = Self::new();
        for v in values {
            bst.insert(v.clone());
        }
        bst
    }
}

impl<T: Ord> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}
