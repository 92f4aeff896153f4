//! Exponential search over a sorted slice.
//!
//! Doubles a bound until arr[bound] >= target, then binary-searches the
//! bracketed range. O(log i) where i is the target's index, which beats
//! plain binary search when the target sits near the front.

use super::binary_search::binary_search;

pub fn exponential_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    if &arr[0] == target {
        return Some(0);
    }
    let mut bound = 1;
    while bound < arr.len() && &arr[bound] < target {
        bound *= 2;
    }
    let lo = bound / 2;
    let hi = (bound + 1).min(arr.len());
    binary_search(&arr[lo..hi], target).map(|i| lo + i)
}
