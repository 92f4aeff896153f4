//! AVL tree - self-balancing binary search tree.
//!
//! Variables:
//!   root   : Tree<T>  - Option<Box<Node>>, nodes cache their height
//!   balance: i64      - height(left) - height(right), kept in [-1, 1]
//!
//! Equations:
//!   insert / remove / contains     O(log N), guaranteed
//!   rebalance cases:
//!     balance > 1, left-heavy child   -> rotate right          (LL)
//!     balance > 1, right-heavy child  -> rotate left-right     (LR)
//!     balance < -1, right-heavy child -> rotate left           (RR)
//!     balance < -1, left-heavy child  -> rotate right-left     (RL)

use std::cmp::Ordering;

struct Node<T> {
    val: T,
    height: i64,
    left: Tree<T>,
    right: Tree<T>,
}

type Tree<T> = Option<Box<Node<T>>>;

pub struct AvlTree<T> {
    root: Tree<T>,
    len: usize,
}

fn height<T>(tree: &Tree<T>) -> i64 {
    tree.as_deref().map_or(0, |n| n.height)
}

fn balance_factor<T>(node: &Node<T>) -> i64 {
    height(&node.left) - height(&node.right)
}

fn update_height<T>(node: &mut Node<T>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

/// Rotate the subtree right: the left child becomes the new root.
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            update_height(&mut node);
            pivot.right = Some(node);
            update_height(&mut pivot);
            pivot
        }
        None => node,
    }
}

/// Rotate the subtree left: the right child becomes the new root.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            update_height(&mut node);
            pivot.left = Some(node);
            update_height(&mut pivot);
            pivot
        }
        None => node,
    }
}

/// Restore the AVL invariant at `node` after one insert or remove below
/// it. At most two rotations.
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    update_height(&mut node);
    let balance = balance_factor(&node);
    if balance > 1 {
        if node.left.as_deref().map_or(0, balance_factor) < 0 {
            if let Some(left) = node.left.take() {
                node.left = Some(rotate_left(left));
            }
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if node.right.as_deref().map_or(0, balance_factor) > 0 {
            if let Some(right) = node.right.take() {
                node.right = Some(rotate_right(right));
            }
        }
        return rotate_left(node);
    }
    node
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> i64 {
        height(&self.root)
    }

    /// Insert `val`, rebalancing along the path. False when already
    /// present.
    pub fn insert(&mut self, val: T) -> bool {
        let (root, inserted) = Self::insert_into(self.root.take(), val);
        self.root = root;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_into(tree: Tree<T>, val: T) -> (Tree<T>, bool) {
        match tree {
            None => (
                Some(Box::new(Node {
                    val,
                    height: 1,
                    left: None,
                    right: None,
                })),
                true,
            ),
            Some(mut node) => {
                let inserted = match val.cmp(&node.val) {
                    Ordering::Less => {
                        let (left, inserted) = Self::insert_into(node.left.take(), val);
                        node.left = left;
                        inserted
                    }
                    Ordering::Greater => {
                        let (right, inserted) = Self::insert_into(node.right.take(), val);
                        node.right = right;
                        inserted
                    }
                    Ordering::Equal => false,
                };
                (Some(rebalance(node)), inserted)
            }
        }
    }

    /// Remove `val`, rebalancing along the path. False if absent.
    pub fn remove(&mut self, val: &T) -> bool {
        let (root, removed) = Self::remove_from(self.root.take(), val);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(tree: Tree<T>, val: &T) -> (Tree<T>, bool) {
        match tree {
            None => (None, false),
            Some(mut node) => match val.cmp(&node.val) {
                Ordering::Less => {
                    let (left, removed) = Self::remove_from(node.left.take(), val);
                    node.left = left;
                    (Some(rebalance(node)), removed)
                }
                Ordering::Greater => {
                    let (right, removed) = Self::remove_from(node.right.take(), val);
                    node.right = right;
                    (Some(rebalance(node)), removed)
                }
                Ordering::Equal => match (node.left.take(), node.right.take()) {
                    (None, None) => (None, true),
                    (Some(l), None) => (Some(l), true),
                    (None, Some(r)) => (Some(r), true),
                    (Some(l), Some(r)) => {
                        let (successor, rest) = Self::detach_min(r);
                        node.val = successor;
                        node.left = Some(l);
                        node.right = rest;
                        (Some(rebalance(node)), true)
                    }
                },
            },
        }
    }

    fn detach_min(mut node: Box<Node<T>>) -> (T, Tree<T>) {
        match node.left.take() {
            None => (node.val, node.right),
            Some(left) => {
                let (min_val, rest) = Self::detach_min(left);
                node.left = rest;
                (min_val, Some(rebalance(node)))
            }
        }
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

    /// Whether every node's balance factor is in [-1, 1] and cached
    /// heights are consistent.
    pub fn is_balanced(&self) -> bool {
        fn check<T>(tree: &Tree<T>) -> Option<i64> {
            match tree.as_deref() {
                None => Some(0),
                Some(node) => {
                    let lh = check(&node.left)?;
                    let rh = check(&node.right)?;
                    let h = 1 + lh.max(rh);
                    if (lh - rh).abs() <= 1 && h == node.height {
                        Some(h)
                    } else {
                        None
                    }
                }
            }
        }
        check(&self.root).is_some()
    }
}

impl<T: Ord + Clone> AvlTree<T> {
    pub fn from_slice(values: &[T]) -> Self {
        let mut tree = Self::new();
        for v in values {
            tree.insert(v.clone());
        }
        tree
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
