pub mod backtracking;
pub mod binary_search;
pub mod cyclic_sort;
pub mod dynamic_programming;
pub mod fast_slow_pointers;
pub mod greedy;
pub mod list_reversal;
pub mod merge_intervals;
pub mod sliding_window;
pub mod tree_bfs;
pub mod tree_dfs;
pub mod two_pointers;
