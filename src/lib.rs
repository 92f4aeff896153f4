//! # algo-patterns
//!
//! Classic data-structure and algorithm patterns, organized by category,
//! one concept per file.
//!
//! ## Modules
//!
//! - `patterns` - The twelve coaching patterns (two pointers, sliding window,
//!   fast/slow pointers, merge intervals, cyclic sort, in-place list
//!   reversal, tree BFS, tree DFS, binary search variants, backtracking,
//!   dynamic programming, greedy)
//! - `structures` - Core containers (array, linked lists incl. circular,
//!   stack, queue, deque, binary tree, BST, AVL tree, heaps, hash table)
//! - `graph` - Representation, traversal, shortest paths, spanning trees,
//!   topological sort
//! - `sorting` - Ordering algorithms (bubble through radix)
//! - `searching` - Lookup algorithms (linear, binary, jump, interpolation,
//!   exponential)
//! - `collections` - Frequency counting, grouping, insertion-ordered map,
//!   heap selection
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algo_patterns::sorting::merge_sort::merge_sort;
//!
//! let sorted = merge_sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! ```
//!
//! ---
//!
//! Every routine is pure, single-threaded, and in-memory. The `tour` binary
//! prints a worked example per category.

pub mod collections;
pub mod computation_map;
pub mod graph;
pub mod patterns;
pub mod searching;
pub mod sorting;
pub mod structures;
