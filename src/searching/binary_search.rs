//! Binary search over a sorted slice, iterative and recursive.
//!
//! Equations:
//!   invariant: target, if present, lies in arr[l..r)
//!   m = l + (r - l) / 2   (no index overflow)
//!   O(log N)

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        if &arr[m] == target {
            return Some(m);
        }
        if &arr[m] < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    None
}

pub fn binary_search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    fn go<T: Ord>(arr: &[T], target: &T, l: usize, r: usize) -> Option<usize> {
        if l >= r {
            return None;
        }
        let m = l + (r - l) / 2;
        match arr[m].cmp(target) {
            std::cmp::Ordering::Equal => Some(m),
            std::cmp::Ordering::Less => go(arr, target, m + 1, r),
            std::cmp::Ordering::Greater => go(arr, target, l, m),
        }
    }
    go(arr, target, 0, arr.len())
}
