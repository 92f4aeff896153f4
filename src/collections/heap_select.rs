//! Bounded-heap selection over iterators.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `n` largest values, descending. A min-heap of size n holds the
/// survivors; O(N log n).
pub fn n_largest<T: Ord, I: IntoIterator<Item = T>>(n: usize, items: I) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<T>> = BinaryHeap::with_capacity(n + 1);
    for item in items {
        heap.push(Reverse(item));
        if heap.len() > n {
            heap.pop();
        }
    }
    let mut out: Vec<T> = heap.into_iter().map(|r| r.0).collect();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}

/// The `n` smallest values, ascending.
pub fn n_smallest<T: Ord, I: IntoIterator<Item = T>>(n: usize, items: I) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<T> = BinaryHeap::with_capacity(n + 1);
    for item in items {
        heap.push(item);
        if heap.len() > n {
            heap.pop();
        }
    }
    let mut out = heap.into_vec();
    out.sort_unstable();
    out
}

/// Push `val`, then pop the maximum, in one rebalance. Returns `val`
/// itself when it exceeds everything in the heap.
pub fn push_pop_max<T: Ord>(heap: &mut BinaryHeap<T>, val: T) -> T {
    match heap.peek_mut() {
        // swapping under PeekMut re-sifts on drop
        Some(mut top) if *top > val => std::mem::replace(&mut *top, val),
        _ => val,
    }
}
