//! Binary tree with owned nodes.
//!
//! Variables:
//!   root : Tree<T> = Option<Box<TreeNode<T>>>
//!
//! Equations:
//!   height(None)    = 0
//!   height(node)    = 1 + max(height(left), height(right))
//!   size(None)      = 0
//!   size(node)      = 1 + size(left) + size(right)
//!   leaves(node)    = 1 if both children None
//!
//! Traversal orders:
//!   inorder   = left, node, right
//!   preorder  = node, left, right
//!   postorder = left, right, node
//!   level     = breadth-first via queue

use std::collections::VecDeque;

pub struct TreeNode<T> {
    pub val: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

pub type Tree<T> = Option<Box<TreeNode<T>>>;

impl<T> TreeNode<T> {
    pub fn leaf(val: T) -> Box<Self> {
        Box::new(Self {
            val,
            left: None,
            right: None,
        })
    }

    pub fn with_children(val: T, left: Tree<T>, right: Tree<T>) -> Box<Self> {
        Box::new(Self { val, left, right })
    }
}

/// Build a tree from a heap-indexed level-order listing: slot `i` has its
/// children at `2i + 1` and `2i + 2`, `None` marks an absent subtree.
pub fn from_level_order<T: Clone>(values: &[Option<T>]) -> Tree<T> {
    fn build<T: Clone>(values: &[Option<T>], i: usize) -> Tree<T> {
        let val = values.get(i).cloned().flatten()?;
        Some(TreeNode::with_children(
            val,
            build(values, 2 * i + 1),
            build(values, 2 * i + 2),
        ))
    }
    build(values, 0)
}

pub fn height<T>(root: &Tree<T>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

pub fn size<T>(root: &Tree<T>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + size(&node.left) + size(&node.right),
    }
}

pub fn count_leaves<T>(root: &Tree<T>) -> usize {
    match root {
        None => 0,
        Some(node) => {
            if node.left.is_none() && node.right.is_none() {
                1
            } else {
                count_leaves(&node.left) + count_leaves(&node.right)
            }
        }
    }
}

pub fn contains<T: PartialEq>(root: &Tree<T>, target: &T) -> bool {
    match root {
        None => false,
        Some(node) => {
            node.val == *target || contains(&node.left, target) || contains(&node.right, target)
        }
    }
}

/// Swap left and right children everywhere.
pub fn mirror<T>(root: &mut Tree<T>) {
    if let Some(node) = root {
        std::mem::swap(&mut node.left, &mut node.right);
        mirror(&mut node.left);
        mirror(&mut node.right);
    }
}

pub fn inorder<T: Clone>(root: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    fn walk<T: Clone>(node: &Tree<T>, out: &mut Vec<T>) {
        if let Some(n) = node {
            walk(&n.left, out);
            out.push(n.val.clone());
            walk(&n.right, out);
        }
    }
    walk(root, &mut out);
    out
}

pub fn preorder<T: Clone>(root: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    fn walk<T: Clone>(node: &Tree<T>, out: &mut Vec<T>) {
        if let Some(n) = node {
            out.push(n.val.clone());
            walk(&n.left, out);
            walk(&n.right, out);
        }
    }
    walk(root, &mut out);
    out
}

pub fn postorder<T: Clone>(root: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    fn walk<T: Clone>(node: &Tree<T>, out: &mut Vec<T>) {
        if let Some(n) = node {
            walk(&n.left, out);
            walk(&n.right, out);
            out.push(n.val.clone());
        }
    }
    walk(root, &mut out);
    out
}

/// Inorder without recursion: push the whole left spine, pop, then step
/// right.
pub fn inorder_iterative<T: Clone>(root: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    let mut cur = root.as_deref();
    while cur.is_some() || !stack.is_empty() {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left.as_deref();
        }
        if let Some(node) = stack.pop() {
            out.push(node.val.clone());
            cur = node.right.as_deref();
        }
    }
    out
}

/// Preorder without recursion: stack of pending nodes, right child pushed
/// first so left is visited first.
pub fn preorder_iterative<T: Clone>(root: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        out.push(node.val.clone());
        if let Some(r) = node.right.as_deref() {
            stack.push(r);
        }
        if let Some(l) = node.left.as_deref() {
            stack.push(l);
        }
    }
    out
}

/// Postorder without recursion: produce node-right-left, then reverse.
pub fn postorder_iterative<T: Clone>(root: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        out.push(node.val.clone());
        if let Some(l) = node.left.as_deref() {
            stack.push(l);
        }
        if let Some(r) = node.right.as_deref() {
            stack.push(r);
        }
    }
    out.reverse();
    out
}

/// Values level by level.
pub fn level_order<T: Clone>(root: &Tree<T>) -> Vec<Vec<T>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode<T>> = VecDeque::new();
    if let Some(node) = root.as_deref() {
        queue.push_back(node);
    }
    while !queue.is_empty() {
        let mut level = Vec::with_capacity(queue.len());
        for _ in 0..queue.len() {
            if let Some(node) = queue.pop_front() {
                level.push(node.val.clone());
                if let Some(l) = node.left.as_deref() {
                    queue.push_back(l);
                }
                if let Some(r) = node.right.as_deref() {
                    queue.push_back(r);
                }
            }
        }
        levels.push(level);
    }
    levels
}
