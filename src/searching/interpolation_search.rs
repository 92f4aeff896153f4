//! Interpolation search over a sorted i64 slice.
//!
//! Equations:
//!   probe = l + (target - arr[l]) * (r - l) / (arr[r] - arr[l])
//!   O(log log N) on uniformly distributed data, O(N) worst case.

pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut l, mut r) = (0usize, arr.len() - 1);
    while l <= r && arr[l] <= target && target <= arr[r] {
        if arr[l] == arr[r] {
            return (arr[l] == target).then_some(l);
        }
        // i128 keeps the numerator from overflowing on wide ranges
        let offset = (target - arr[l]) as i128 * (r - l) as i128 / (arr[r] - arr[l]) as i128;
        let probe = l + offset as usize;
        match arr[probe].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(probe),
            std::cmp::Ordering::Less => l = probe + 1,
            std::cmp::Ordering::Greater => {
                if probe == 0 {
                    return None;
                }
                r = probe - 1;
            }
        }
    }
    None
}
