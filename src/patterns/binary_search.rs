//! Binary search variants.
//!
//! Every routine keeps the invariant that the answer, if present, lies in
//! [low, high], and computes the midpoint as low + (high - low) / 2 so the
//! index arithmetic cannot overflow.

/// Search a slice sorted in either direction; the direction is inferred
/// from the endpoints.
pub fn order_agnostic_search<T: Ord>(arr: &[T], key: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let ascending = arr[0] <= arr[arr.len() - 1];
    let (mut low, mut high) = (0, arr.len() - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        if arr[mid] == *key {
            return Some(mid);
        }
        let go_right = if ascending {
            arr[mid] < *key
        } else {
            arr[mid] > *key
        };
        if go_right {
            low = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            high = mid - 1;
        }
    }
    None
}

/// Index of the smallest element >= `key` in an ascending slice.
pub fn search_ceiling(arr: &[i64], key: i64) -> Option<usize> {
    if arr.is_empty() || key > arr[arr.len() - 1] {
        return None;
    }
    let (mut low, mut high) = (0usize, arr.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] < key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low)
}

/// Index of the largest element <= `key` in an ascending slice.
pub fn search_floor(arr: &[i64], key: i64) -> Option<usize> {
    if arr.is_empty() || key < arr[0] {
        return None;
    }
    let (mut low, mut high) = (0usize, arr.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] <= key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low - 1)
}

/// Smallest letter strictly greater than `key`, wrapping to the first.
pub fn next_letter(letters: &[char], key: char) -> Option<char> {
    if letters.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0usize, letters.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if letters[mid] <= key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(letters[low % letters.len()])
}

/// First and last positions of `key` in an ascending slice.
pub fn find_range(arr: &[i64], key: i64) -> Option<(usize, usize)> {
    let first = bound(arr, key, true)?;
    let last = bound(arr, key, false)?;
    Some((first, last))
}

fn bound(arr: &[i64], key: i64, first: bool) -> Option<usize> {
    let mut found = None;
    let (mut low, mut high) = (0isize, arr.len() as isize - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        let v = arr[mid as usize];
        if v < key {
            low = mid + 1;
        } else if v > key {
            high = mid - 1;
        } else {
            found = Some(mid as usize);
            if first {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        }
    }
    found
}

/// Read access to an array whose length is unknown to the searcher;
/// out-of-bounds reads return None.
pub trait ArrayReader {
    fn get(&self, index: usize) -> Option<i64>;
}

impl ArrayReader for &[i64] {
    fn get(&self, index: usize) -> Option<i64> {
        (**self).get(index).copied()
    }
}

/// Search an unbounded ascending reader: grow the window exponentially,
/// then binary-search inside it, treating missing slots as +infinity.
pub fn search_infinite<R: ArrayReader>(reader: &R, key: i64) -> Option<usize> {
    let (mut low, mut high) = (0usize, 1usize);
    while reader.get(high).is_some_and(|v| v < key) {
        let span = high - low + 1;
        low = high + 1;
        high += 2 * span;
    }

    let mut high = high as isize;
    let mut low = low as isize;
    while low <= high {
        let mid = low + (high - low) / 2;
        match reader.get(mid as usize) {
            Some(v) if v == key => return Some(mid as usize),
            Some(v) if v < key => low = mid + 1,
            _ => high = mid - 1,
        }
    }
    None
}

/// Index of any element strictly greater than both neighbours. Assumes
/// arr[i] != arr[i + 1] for adjacent entries.
pub fn find_peak(arr: &[i64]) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0usize, arr.len() - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] < arr[mid + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low)
}

/// Search a sorted slice rotated an unknown number of times.
pub fn search_rotated(arr: &[i64], key: i64) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0isize, arr.len() as isize - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        let m = mid as usize;
        if arr[m] == key {
            return Some(m);
        }
        if arr[low as usize] <= arr[m] {
            // left half is sorted
            if arr[low as usize] <= key && key < arr[m] {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        } else {
            // right half is sorted
            if arr[m] < key && key <= arr[high as usize] {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }
    }
    None
}

/// How many times an ascending slice was rotated (index of its minimum).
pub fn rotation_count(arr: &[i64]) -> usize {
    if arr.is_empty() {
        return 0;
    }
    let (mut low, mut high) = (0usize, arr.len() - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] > arr[high] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Minimum element of a rotated ascending slice.
pub fn min_in_rotated(arr: &[i64]) -> Option<i64> {
    if arr.is_empty() {
        return None;
    }
    Some(arr[rotation_count(arr)])
}

/// Index of the maximum of a bitonic slice (ascending then descending).
pub fn bitonic_max_index(arr: &[i64]) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0usize, arr.len() - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] < arr[mid + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low)
}

/// Search a bitonic slice: find the turning point, then search each
/// sorted side.
pub fn search_bitonic(arr: &[i64], key: i64) -> Option<usize> {
    let max = bitonic_max_index(arr)?;
    bound(&arr[..=max], key, true).or_else(|| {
        descending_search(&arr[max + 1..], key).map(|i| i + max + 1)
    })
}

fn descending_search(arr: &[i64], key: i64) -> Option<usize> {
    let (mut low, mut high) = (0isize, arr.len() as isize - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        let v = arr[mid as usize];
        if v == key {
            return Some(mid as usize);
        }
        if v > key {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    None
}

/// Index where `key` is, or would be inserted to keep the slice sorted.
pub fn search_insert_position(arr: &[i64], key: i64) -> usize {
    let (mut low, mut high) = (0usize, arr.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] < key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}
