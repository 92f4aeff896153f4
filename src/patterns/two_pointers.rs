//! Two pointers over sorted slices.
//!
//! One index walks from each end (or both from the front) and the pair
//! moves inward under a monotone condition, so each element is visited a
//! constant number of times: O(n) after any required sort.

/// Indices of the two entries of a sorted slice summing to `target`.
pub fn pair_with_target_sum(arr: &[i64], target: i64) -> Option<(usize, usize)> {
    if arr.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0, arr.len() - 1);
    while left < right {
        let sum = arr[left] + arr[right];
        if sum == target {
            return Some((left, right));
        }
        if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    None
}

/// Compact a sorted slice so each value appears once; returns the new
/// length. Elements past the returned length are unspecified.
pub fn remove_duplicates<T: PartialEq>(arr: &mut [T]) -> usize {
    if arr.len() <= 1 {
        return arr.len();
    }
    let mut next = 1;
    for i in 1..arr.len() {
        if arr[next - 1] != arr[i] {
            arr.swap(next, i);
            next += 1;
        }
    }
    next
}

/// Squares of a sorted slice, in sorted order. Largest squares live at the
/// ends of the input, so fill the output back to front.
pub fn sorted_squares(arr: &[i64]) -> Vec<i64> {
    let n = arr.len();
    let mut squares = vec![0; n];
    let (mut left, mut right) = (0, n);
    for slot in (0..n).rev() {
        let ls = arr[left] * arr[left];
        let rs = arr[right - 1] * arr[right - 1];
        if ls > rs {
            squares[slot] = ls;
            left += 1;
        } else {
            squares[slot] = rs;
            right -= 1;
        }
    }
    squares
}

/// All unique triplets summing to zero, each triplet ascending.
pub fn triplet_sum_to_zero(arr: &[i64]) -> Vec<[i64; 3]> {
    let mut arr = arr.to_vec();
    arr.sort_unstable();
    let mut triplets = Vec::new();

    for i in 0..arr.len() {
        if i > 0 && arr[i] == arr[i - 1] {
            continue;
        }
        search_pair(&arr, -arr[i], i + 1, &mut triplets);
    }
    triplets
}

fn search_pair(arr: &[i64], target: i64, mut left: usize, triplets: &mut Vec<[i64; 3]>) {
    if arr.is_empty() {
        return;
    }
    let mut right = arr.len() - 1;
    while left < right {
        let sum = arr[left] + arr[right];
        if sum == target {
            triplets.push([-target, arr[left], arr[right]]);
            left += 1;
            right -= 1;
            while left < right && arr[left] == arr[left - 1] {
                left += 1;
            }
            while left < right && arr[right] == arr[right + 1] {
                right -= 1;
            }
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
}

/// Whether two strings are equal after applying `#` as backspace.
/// Walks both from the tail so no buffer is built.
pub fn backspace_compare(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut ia = a.len() as isize - 1;
    let mut ib = b.len() as isize - 1;

    loop {
        ia = next_valid_index(&a, ia);
        ib = next_valid_index(&b, ib);
        match (ia >= 0, ib >= 0) {
            (false, false) => return true,
            (true, true) => {
                if a[ia as usize] != b[ib as usize] {
                    return false;
                }
                ia -= 1;
                ib -= 1;
            }
            _ => return false,
        }
    }
}

fn next_valid_index(s: &[char], mut index: isize) -> isize {
    let mut backspaces = 0;
    while index >= 0 {
        if s[index as usize] == '#' {
            backspaces += 1;
        } else if backspaces > 0 {
            backspaces -= 1;
        } else {
            break;
        }
        index -= 1;
    }
    index
}
