//! Tree depth-first search: root-to-leaf path problems.

use crate::structures::binary_tree::{Tree, TreeNode};

/// Whether some root-to-leaf path sums to `target`.
pub fn has_path_sum(root: &Tree<i64>, target: i64) -> bool {
    match root {
        None => false,
        Some(node) => {
            if node.left.is_none() && node.right.is_none() {
                return node.val == target;
            }
            let remaining = target - node.val;
            has_path_sum(&node.left, remaining) || has_path_sum(&node.right, remaining)
        }
    }
}

/// Every root-to-leaf path summing to `target`.
pub fn find_all_paths(root: &Tree<i64>, target: i64) -> Vec<Vec<i64>> {
    fn walk(node: &Tree<i64>, target: i64, path: &mut Vec<i64>, out: &mut Vec<Vec<i64>>) {
        if let Some(n) = node {
            path.push(n.val);
            if n.left.is_none() && n.right.is_none() && n.val == target {
                out.push(path.clone());
            } else {
                walk(&n.left, target - n.val, path, out);
                walk(&n.right, target - n.val, path, out);
            }
            path.pop();
        }
    }
    let mut out = Vec::new();
    walk(root, target, &mut Vec::new(), &mut out);
    out
}

/// Treat every root-to-leaf path as a decimal number; sum them all.
pub fn sum_of_path_numbers(root: &Tree<i64>) -> i64 {
    fn walk(node: &Tree<i64>, prefix: i64) -> i64 {
        match node {
            None => 0,
            Some(n) => {
                let value = prefix * 10 + n.val;
                if n.left.is_none() && n.right.is_none() {
                    value
                } else {
                    walk(&n.left, value) + walk(&n.right, value)
                }
            }
        }
    }
    walk(root, 0)
}

/// Whether `sequence` spells out some root-to-leaf path exactly.
pub fn path_with_sequence(root: &Tree<i64>, sequence: &[i64]) -> bool {
    fn walk(node: &TreeNode<i64>, sequence: &[i64]) -> bool {
        match sequence.split_first() {
            None => false,
            Some((&head, rest)) => {
                if node.val != head {
                    return false;
                }
                if node.left.is_none() && node.right.is_none() {
                    return rest.is_empty();
                }
                node.left.as_deref().is_some_and(|l| walk(l, rest))
                    || node.right.as_deref().is_some_and(|r| walk(r, rest))
            }
        }
    }
    match root.as_deref() {
        None => sequence.is_empty(),
        Some(node) => walk(node, sequence),
    }
}

/// Count downward paths (any start node, any end node) summing to
/// `target`. Checks every suffix of the current root path at each node.
pub fn count_paths_for_sum(root: &Tree<i64>, target: i64) -> usize {
    fn walk(node: &Tree<i64>, target: i64, path: &mut Vec<i64>) -> usize {
        let n = match node {
            None => return 0,
            Some(n) => n,
        };
        path.push(n.val);

        let mut count = 0;
        let mut sum = 0;
        for &v in path.iter().rev() {
            sum += v;
            if sum == target {
                count += 1;
            }
        }
        count += walk(&n.left, target, path);
        count += walk(&n.right, target, path);
        path.pop();
        count
    }
    walk(root, target, &mut Vec::new())
}

/// Number of edges on the longest path between any two nodes.
pub fn tree_diameter<T>(root: &Tree<T>) -> usize {
    fn height_and_diameter<T>(node: &Tree<T>) -> (usize, usize) {
        match node {
            None => (0, 0),
            Some(n) => {
                let (lh, ld) = height_and_diameter(&n.left);
                let (rh, rd) = height_and_diameter(&n.right);
                (1 + lh.max(rh), (lh + rh).max(ld).max(rd))
            }
        }
    }
    height_and_diameter(root).1
}

/// Maximum sum over any node-to-node path. None for an empty tree.
pub fn maximum_path_sum(root: &Tree<i64>) -> Option<i64> {
    fn walk(node: &Tree<i64>, best: &mut Option<i64>) -> i64 {
        let n = match node {
            None => return 0,
            Some(n) => n,
        };
        // negative branches contribute nothing
        let left = walk(&n.left, best).max(0);
        let right = walk(&n.right, best).max(0);
        let through = n.val + left + right;
        *best = Some(best.map_or(through, |b| b.max(through)));
        n.val + left.max(right)
    }
    let mut best = None;
    walk(root, &mut best);
    best
}
