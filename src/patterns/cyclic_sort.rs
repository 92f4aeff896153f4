//! Cyclic sort: arrays over a known range 1..=n (or 0..=n).
//!
//! Each value's correct slot is `value - 1`. Swap the current value into
//! its slot until the slot already holds it, then advance. Every swap
//! places at least one value, so the whole family runs in O(n) with O(1)
//! extra space. Values outside the range are left where they fall.

/// Sort a permutation of 1..=n in place; out-of-range values stay put.
pub fn cyclic_sort(nums: &mut [i64]) {
    place_one_based(nums);
}

/// The one value of 0..=n absent from a slice of n distinct values.
pub fn find_missing_number(nums: &mut [i64]) -> i64 {
    let n = nums.len();
    let mut i = 0;
    while i < n {
        let j = nums[i] as usize;
        if (nums[i] as usize) < n && nums[i] != nums[j] {
            nums.swap(i, j);
        } else {
            i += 1;
        }
    }
    for (i, &v) in nums.iter().enumerate() {
        if v != i as i64 {
            return i as i64;
        }
    }
    n as i64
}

/// All values of 1..=n absent from the slice (duplicates take their place).
pub fn find_all_missing(nums: &mut [i64]) -> Vec<i64> {
    place_one_based(nums);
    nums.iter()
        .enumerate()
        .filter(|&(i, &v)| v != i as i64 + 1)
        .map(|(i, _)| i as i64 + 1)
        .collect()
}

/// The single duplicate in n+1 values drawn from 1..=n.
pub fn find_duplicate(nums: &mut [i64]) -> Option<i64> {
    let mut i = 0;
    while i < nums.len() {
        if nums[i] != i as i64 + 1 {
            let j = (nums[i] - 1) as usize;
            if nums[i] != nums[j] {
                nums.swap(i, j);
            } else {
                return Some(nums[i]);
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Every value appearing twice in a slice of values from 1..=n.
pub fn find_all_duplicates(nums: &mut [i64]) -> Vec<i64> {
    place_one_based(nums);
    nums.iter()
        .enumerate()
        .filter(|&(i, &v)| v != i as i64 + 1)
        .map(|(_, &v)| v)
        .collect()
}

/// The (duplicate, missing) pair of a 1..=n slice corrupted in one slot.
pub fn find_corrupt_pair(nums: &mut [i64]) -> Option<(i64, i64)> {
    place_one_based(nums);
    nums.iter()
        .enumerate()
        .find(|&(i, &v)| v != i as i64 + 1)
        .map(|(i, &v)| (v, i as i64 + 1))
}

/// Smallest positive integer not present in an arbitrary slice.
pub fn smallest_missing_positive(nums: &mut [i64]) -> i64 {
    let n = nums.len() as i64;
    let mut i = 0;
    while i < nums.len() {
        let v = nums[i];
        if v > 0 && v <= n && v != nums[(v - 1) as usize] {
            nums.swap(i, (v - 1) as usize);
        } else {
            i += 1;
        }
    }
    for (i, &v) in nums.iter().enumerate() {
        if v != i as i64 + 1 {
            return i as i64 + 1;
        }
    }
    n + 1
}

/// First `k` positive integers missing from the slice, ascending.
pub fn first_k_missing_positive(nums: &mut [i64], k: usize) -> Vec<i64> {
    let n = nums.len() as i64;
    let mut i = 0;
    while i < nums.len() {
        let v = nums[i];
        if v > 0 && v <= n && v != nums[(v - 1) as usize] {
            nums.swap(i, (v - 1) as usize);
        } else {
            i += 1;
        }
    }

    let mut missing = Vec::with_capacity(k);
    let mut extras = std::collections::HashSet::new();
    for (i, &v) in nums.iter().enumerate() {
        if missing.len() >= k {
            break;
        }
        if v != i as i64 + 1 {
            missing.push(i as i64 + 1);
            extras.insert(v);
        }
    }
    // values beyond n fill the remainder, skipping ones already present
    let mut candidate = n + 1;
    while missing.len() < k {
        if !extras.contains(&candidate) {
            missing.push(candidate);
        }
        candidate += 1;
    }
    missing
}

fn place_one_based(nums: &mut [i64]) {
    let n = nums.len() as i64;
    let mut i = 0;
    while i < nums.len() {
        let v = nums[i];
        if v >= 1 && v <= n && v != nums[(v - 1) as usize] {
            nums.swap(i, (v - 1) as usize);
        } else {
            i += 1;
        }
    }
}
