//! Tree breadth-first search.
//!
//! A queue holds the frontier; `queue.len()` at the top of each round is
//! exactly one level, which is what separates this family from plain BFS.

use std::collections::VecDeque;

use crate::structures::binary_tree::{Tree, TreeNode};

/// Values level by level, top down.
pub fn level_order<T: Clone>(root: &Tree<T>) -> Vec<Vec<T>> {
    walk_levels(root)
}

/// Values level by level, bottom up.
pub fn reverse_level_order<T: Clone>(root: &Tree<T>) -> Vec<Vec<T>> {
    let mut levels = walk_levels(root);
    levels.reverse();
    levels
}

/// Levels alternating left-to-right and right-to-left.
pub fn zigzag_level_order<T: Clone>(root: &Tree<T>) -> Vec<Vec<T>> {
    let mut levels = walk_levels(root);
    for (depth, level) in levels.iter_mut().enumerate() {
        if depth % 2 == 1 {
            level.reverse();
        }
    }
    levels
}

/// Arithmetic mean of each level.
pub fn level_averages(root: &Tree<i64>) -> Vec<f64> {
    walk_levels(root)
        .into_iter()
        .map(|level| level.iter().sum::<i64>() as f64 / level.len() as f64)
        .collect()
}

/// Depth of the shallowest leaf. Zero for an empty tree.
pub fn minimum_depth<T>(root: &Tree<T>) -> usize {
    let mut queue: VecDeque<&TreeNode<T>> = VecDeque::new();
    if let Some(node) = root.as_deref() {
        queue.push_back(node);
    } else {
        return 0;
    }
    let mut depth = 0;
    while !queue.is_empty() {
        depth += 1;
        for _ in 0..queue.len() {
            if let Some(node) = queue.pop_front() {
                if node.left.is_none() && node.right.is_none() {
                    return depth;
                }
                if let Some(l) = node.left.as_deref() {
                    queue.push_back(l);
                }
                if let Some(r) = node.right.as_deref() {
                    queue.push_back(r);
                }
            }
        }
    }
    depth
}

/// Depth of the deepest leaf. Zero for an empty tree.
pub fn maximum_depth<T>(root: &Tree<T>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + maximum_depth(&node.left).max(maximum_depth(&node.right)),
    }
}

/// The value visited immediately after `key` in level order.
pub fn level_order_successor<T: Clone + PartialEq>(root: &Tree<T>, key: &T) -> Option<T> {
    let mut queue: VecDeque<&TreeNode<T>> = VecDeque::new();
    queue.push_back(root.as_deref()?);
    let mut found = false;
    while let Some(node) = queue.pop_front() {
        if found {
            return Some(node.val.clone());
        }
        if node.val == *key {
            found = true;
        }
        if let Some(l) = node.left.as_deref() {
            queue.push_back(l);
        }
        if let Some(r) = node.right.as_deref() {
            queue.push_back(r);
        }
    }
    None
}

/// Rightmost value of each level, top down.
pub fn right_view<T: Clone>(root: &Tree<T>) -> Vec<T> {
    walk_levels(root)
        .into_iter()
        .filter_map(|level| level.last().cloned())
        .collect()
}

fn walk_levels<T: Clone>(root: &Tree<T>) -> Vec<Vec<T>> {
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
