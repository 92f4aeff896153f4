//! Jump search over a sorted slice.
//!
//! Equations:
//!   step = floor(sqrt(N)); jump by step until arr[block end] >= target,
//!   then scan the block linearly.
//!   O(sqrt N) comparisons.

pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let step = (n as f64).sqrt() as usize;
    let step = step.max(1);

    let mut block_start = 0;
    while block_start < n && &arr[(block_start + step - 1).min(n - 1)] < target {
        block_start += step;
    }

    let block_end = (block_start + step).min(n);
    for i in block_start..block_end {
        if &arr[i] == target {
            return Some(i);
        }
    }
    None
}
