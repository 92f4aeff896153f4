//! Sliding window over slices and strings.
//!
//! A window [start, end] grows from the right and shrinks from the left
//! whenever its summary (sum, distinct count, replacement budget) breaks
//! the constraint. Both edges only move forward: O(n).

use std::collections::HashMap;

/// Maximum sum of any contiguous subarray of size `k`. None if `k` is zero
/// or exceeds the slice.
pub fn max_sum_subarray(arr: &[i64], k: usize) -> Option<i64> {
    if k == 0 || k > arr.len() {
        return None;
    }
    let mut window: i64 = arr[..k].iter().sum();
    let mut best = window;
    for end in k..arr.len() {
        window += arr[end] - arr[end - k];
        best = best.max(window);
    }
    Some(best)
}

/// Length of the smallest contiguous subarray with sum >= `target`.
/// Zero if no such subarray exists.
pub fn smallest_subarray_with_sum(arr: &[i64], target: i64) -> usize {
    let mut sum = 0;
    let mut best = usize::MAX;
    let mut start = 0;
    for end in 0..arr.len() {
        sum += arr[end];
        while sum >= target {
            best = best.min(end - start + 1);
            sum -= arr[start];
            start += 1;
        }
    }
    if best == usize::MAX {
        0
    } else {
        best
    }
}

/// Length of the longest substring with at most `k` distinct characters.
pub fn longest_substring_k_distinct(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for end in 0..chars.len() {
        *freq.entry(chars[end]).or_insert(0) += 1;
        while freq.len() > k {
            let left = chars[start];
            if let Some(count) = freq.get_mut(&left) {
                *count -= 1;
                if *count == 0 {
                    freq.remove(&left);
                }
            }
            start += 1;
        }
        // with k == 0 the shrink loop empties the window past `end`
        best = best.max((end + 1).saturating_sub(start));
    }
    best
}

/// Longest run of trees picking at most two fruit kinds (longest subarray
/// with at most two distinct values).
pub fn fruits_into_baskets(fruits: &[u32]) -> usize {
    let mut baskets: HashMap<u32, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for end in 0..fruits.len() {
        *baskets.entry(fruits[end]).or_insert(0) += 1;
        while baskets.len() > 2 {
            let left = fruits[start];
            if let Some(count) = baskets.get_mut(&left) {
                *count -= 1;
                if *count == 0 {
                    baskets.remove(&left);
                }
            }
            start += 1;
        }
        best = best.max(end - start + 1);
    }
    best
}

/// Length of the longest substring without a repeated character.
pub fn longest_substring_no_repeat(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for (end, &c) in chars.iter().enumerate() {
        if let Some(&seen) = last_seen.get(&c) {
            // jump start past the previous occurrence, never backwards
            start = start.max(seen + 1);
        }
        last_seen.insert(c, end);
        best = best.max(end - start + 1);
    }
    best
}

/// Longest substring of identical letters achievable by replacing at most
/// `k` characters.
pub fn longest_substring_with_replacement(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut max_repeat = 0;
    let mut best = 0;
    for end in 0..chars.len() {
        let count = freq.entry(chars[end]).or_insert(0);
        *count += 1;
        max_repeat = max_repeat.max(*count);
        if end - start + 1 - max_repeat > k {
            if let Some(count) = freq.get_mut(&chars[start]) {
                *count -= 1;
            }
            start += 1;
        }
        best = best.max(end - start + 1);
    }
    best
}

/// Longest subarray of ones achievable by flipping at most `k` zeros.
pub fn longest_ones_after_replacement(arr: &[u8], k: usize) -> usize {
    let mut ones = 0;
    let mut start = 0;
    let mut best = 0;
    for end in 0..arr.len() {
        if arr[end] == 1 {
            ones += 1;
        }
        if end - start + 1 - ones > k {
            if arr[start] == 1 {
                ones -= 1;
            }
            start += 1;
        }
        best = best.max(end - start + 1);
    }
    best
}

/// Whether `s` contains any permutation of `pattern` as a substring.
pub fn contains_permutation(s: &str, pattern: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let mut needed: HashMap<char, i64> = HashMap::new();
    for c in pattern.chars() {
        *needed.entry(c).or_insert(0) += 1;
    }
    let window = pattern.chars().count();
    let mut matched = 0;
    let mut start = 0;

    for end in 0..chars.len() {
        if let Some(count) = needed.get_mut(&chars[end]) {
            *count -= 1;
            if *count == 0 {
                matched += 1;
            }
        }
        if matched == needed.len() {
            return true;
        }
        if end + 1 >= window {
            let left = chars[start];
            start += 1;
            if let Some(count) = needed.get_mut(&left) {
                if *count == 0 {
                    matched -= 1;
                }
                *count += 1;
            }
        }
    }
    false
}
