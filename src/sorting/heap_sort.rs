//! Heap sort: build a max-heap in place, then repeatedly move the root
//! behind the shrinking heap boundary.
//!
//! Equations:
//!   build:  sift down from the last parent, O(N)
//!   drain:  N-1 swaps, each followed by an O(log N) sift
//!   total:  O(N log N), in place, not stable

pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i);
    }
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        for child in [2 * i + 1, 2 * i + 2] {
            if child < n && arr[child] > arr[largest] {
                largest = child;
            }
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        i = largest;
    }
}
