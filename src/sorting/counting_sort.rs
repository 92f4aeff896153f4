//! Counting sort for i64 slices with a small value range.
//!
//! Variables:
//!   lo, hi : minimum and maximum values present
//!   K      : hi - lo + 1, size of the count table
//!
//! Equations:
//!   count[v - lo] = occurrences of v
//!   output = lo..=hi expanded by count       O(N + K), stable by value

pub fn counting_sort(arr: &mut [i64]) {
    let Some(&lo) = arr.iter().min() else {
        return;
    };
    let Some(&hi) = arr.iter().max() else {
        return;
    };
    let span = (hi - lo) as usize + 1;
    let mut counts = vec![0usize; span];
    for &v in arr.iter() {
        counts[(v - lo) as usize] += 1;
    }
    let mut out = arr.iter_mut();
    for (offset, &count) in counts.iter().enumerate() {
        let v = lo + offset as i64;
        for _ in 0..count {
            if let Some(slot) = out.next() {
                *slot = v;
            }
        }
    }
}
