//! Dynamic programming: memoization and tabulation.
//!
//! Top-down routines carry a `HashMap` memo; bottom-up routines fill a
//! `Vec` table. Problems with unreachable states (coin change, word
//! break) return `Option` instead of a sentinel.

use std::collections::{HashMap, HashSet};

pub fn fib_memo(n: u64, memo: &mut HashMap<u64, u64>) -> u64 {
    if n <= 1 {
        return n;
    }
    if let Some(&v) = memo.get(&n) {
        return v;
    }
    let val = fib_memo(n - 1, memo) + fib_memo(n - 2, memo);
    memo.insert(n, val);
    val
}

pub fn fib_tab(n: usize) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    let (mut prev, mut cur) = (0u64, 1u64);
    for _ in 2..=n {
        let next = prev + cur;
        prev = cur;
        cur = next;
    }
    cur
}

/// Ways to climb `n` stairs taking 1 or 2 steps.
pub fn climbing_stairs(n: usize) -> u64 {
    if n <= 2 {
        return n as u64;
    }
    let (mut two_back, mut one_back) = (1u64, 2u64);
    for _ in 3..=n {
        let current = two_back + one_back;
        two_back = one_back;
        one_back = current;
    }
    one_back
}

/// Maximum loot from a row of houses where adjacent houses cannot both be
/// robbed.
pub fn house_robber(nums: &[u64]) -> u64 {
    let (mut skip, mut take) = (0u64, 0u64);
    for &v in nums {
        let new_take = skip + v;
        skip = skip.max(take);
        take = new_take;
    }
    skip.max(take)
}

/// Fewest coins summing to `amount`. None if unreachable.
pub fn coin_change(coins: &[u64], amount: u64) -> Option<u64> {
    let amount = amount as usize;
    let mut dp = vec![u64::MAX; amount + 1];
    dp[0] = 0;
    for a in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin <= a && dp[a - coin] != u64::MAX {
                dp[a] = dp[a].min(dp[a - coin] + 1);
            }
        }
    }
    if dp[amount] == u64::MAX {
        None
    } else {
        Some(dp[amount])
    }
}

/// Number of coin combinations summing to `amount` (order ignored).
pub fn coin_change_ways(coins: &[u64], amount: u64) -> u64 {
    let amount = amount as usize;
    let mut dp = vec![0u64; amount + 1];
    dp[0] = 1;
    // outer loop over coins so each combination is counted once
    for &coin in coins {
        let coin = coin as usize;
        for a in coin..=amount {
            dp[a] += dp[a - coin];
        }
    }
    dp[amount]
}

/// Length of the longest common subsequence of two strings.
pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

/// Length of the longest strictly increasing subsequence. O(n^2).
pub fn longest_increasing_subsequence(nums: &[i64]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut dp = vec![1usize; nums.len()];
    for i in 1..nums.len() {
        for j in 0..i {
            if nums[j] < nums[i] {
                dp[i] = dp[i].max(dp[j] + 1);
            }
        }
    }
    dp.into_iter().max().unwrap_or(0)
}

/// 0/1 knapsack: maximum value within `capacity`, each item usable once.
/// One-dimensional table filled right to left.
pub fn knapsack_01(weights: &[usize], values: &[u64], capacity: usize) -> u64 {
    let mut dp = vec![0u64; capacity + 1];
    for (&w, &v) in weights.iter().zip(values) {
        for c in (w..=capacity).rev() {
            dp[c] = dp[c].max(dp[c - w] + v);
        }
    }
    dp[capacity]
}

/// Unbounded knapsack: items usable any number of times.
pub fn unbounded_knapsack(weights: &[usize], values: &[u64], capacity: usize) -> u64 {
    let mut dp = vec![0u64; capacity + 1];
    for c in 1..=capacity {
        for (&w, &v) in weights.iter().zip(values) {
            if w <= c {
                dp[c] = dp[c].max(dp[c - w] + v);
            }
        }
    }
    dp[capacity]
}

/// Whether `s` can be segmented into words from the dictionary.
pub fn word_break(s: &str, dict: &[&str]) -> bool {
    let words: HashSet<&str> = dict.iter().copied().collect();
    let n = s.len();
    let mut dp = vec![false; n + 1];
    dp[0] = true;
    for end in 1..=n {
        for start in 0..end {
            if dp[start] && s.is_char_boundary(start) && s.is_char_boundary(end)
                && words.contains(&s[start..end])
            {
                dp[end] = true;
                break;
            }
        }
    }
    dp[n]
}

/// Minimum single-character edits (insert, delete, replace) turning `a`
/// into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j - 1].min(dp[i - 1][j]).min(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

/// Maximum sum of any non-empty contiguous subarray (Kadane).
pub fn maximum_subarray(nums: &[i64]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut current = first;
    let mut best = first;
    for &v in rest {
        current = v.max(current + v);
        best = best.max(current);
    }
    Some(best)
}

/// Paths from top-left to bottom-right of an m x n grid moving only right
/// or down.
pub fn unique_paths(m: usize, n: usize) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }
    let mut row = vec![1u64; n];
    for _ in 1..m {
        for j in 1..n {
            row[j] += row[j - 1];
        }
    }
    row[n - 1]
}

/// Minimum sum of a top-left to bottom-right path through the grid.
pub fn minimum_path_sum(grid: &[Vec<u64>]) -> u64 {
    if grid.is_empty() || grid[0].is_empty() {
        return 0;
    }
    let n = grid[0].len();
    let mut row = vec![u64::MAX; n];
    row[0] = 0;
    for grid_row in grid {
        row[0] += grid_row[0];
        for j in 1..n {
            row[j] = row[j].min(row[j - 1]) + grid_row[j];
        }
    }
    row[n - 1]
}
