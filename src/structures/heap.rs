//! Binary heaps over a Vec, plus the classic heap selection problems.
//!
//! Variables:
//!   data : Vec<T>  - implicit complete tree, children of i at 2i+1, 2i+2
//!
//! Equations:
//!   push(x):  append then sift up                O(log N)
//!   pop():    swap root/last, sift down          O(log N)
//!   heapify:  sift down from the last parent     O(N)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Build in O(N) by sifting down every internal node.
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        let n = heap.data.len();
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn push(&mut self, val: T) {
        self.data.push(val);
        self.sift_up(self.data.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let val = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        val
    }

    /// Drain into an ascending vector.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(val) = self.pop() {
            out.push(val);
        }
        out
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.data[i] >= self.data[parent] {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < n && self.data[child] < self.data[smallest] {
                    smallest = child;
                }
            }
            if smallest == i {
                break;
            }
            self.data.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MaxHeap<T> {
    inner: MinHeap<Reverse<T>>,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        Self {
            inner: MinHeap::new(),
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            inner: MinHeap::from_vec(data.into_iter().map(Reverse).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.peek().map(|r| &r.0)
    }

    pub fn push(&mut self, val: T) {
        self.inner.push(Reverse(val));
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop().map(|r| r.0)
    }

    /// Drain into a descending vector.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.inner
            .into_sorted_vec()
            .into_iter()
            .map(|r| r.0)
            .collect()
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The k largest values, descending. A min-heap of size k keeps the
/// candidates; anything smaller than its root is skipped.
pub fn k_largest(arr: &[i64], k: usize) -> Vec<i64> {
    let mut heap: BinaryHeap<Reverse<i64>> = BinaryHeap::with_capacity(k + 1);
    for &v in arr {
        heap.push(Reverse(v));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut out: Vec<i64> = heap.into_iter().map(|r| r.0).collect();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}

/// The k smallest values, ascending. Mirror of k_largest with a
/// max-heap of size k.
pub fn k_smallest(arr: &[i64], k: usize) -> Vec<i64> {
    let mut heap: BinaryHeap<i64> = BinaryHeap::with_capacity(k + 1);
    for &v in arr {
        heap.push(v);
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut out: Vec<i64> = heap.into_vec();
    out.sort_unstable();
    out
}

/// Merge k sorted slices into one sorted Vec. The heap holds one cursor
/// per slice keyed by its current value.
pub fn merge_k_sorted(lists: &[&[i64]]) -> Vec<i64> {
    let total: usize = lists.iter().map(|l| l.len()).sum();
    let mut out = Vec::with_capacity(total);
    let mut heap: BinaryHeap<Reverse<(i64, usize, usize)>> = BinaryHeap::new();
    for (li, list) in lists.iter().enumerate() {
        if let Some(&first) = list.first() {
            heap.push(Reverse((first, li, 0)));
        }
    }
    while let Some(Reverse((val, li, i))) = heap.pop() {
        out.push(val);
        if let Some(&next) = lists[li].get(i + 1) {
            heap.push(Reverse((next, li, i + 1)));
        }
    }
    out
}

/// Median of a stream. A max-heap holds the lower half and a min-heap
/// the upper half, rebalanced so their sizes differ by at most one.
pub struct RunningMedian {
    lower: BinaryHeap<i64>,
    upper: BinaryHeap<Reverse<i64>>,
}

impl RunningMedian {
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, val: i64) {
        if self.lower.peek().is_some_and(|&top| val <= top) {
            self.lower.push(val);
        } else {
            self.upper.push(Reverse(val));
        }
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(top) = self.lower.pop() {
                self.upper.push(Reverse(top));
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(Reverse(top)) = self.upper.pop() {
                self.lower.push(top);
            }
        }
    }

    pub fn median(&self) -> Option<f64> {
        match (self.lower.peek(), self.upper.peek()) {
            (None, _) => None,
            (Some(&lo), _) if self.lower.len() > self.upper.len() => Some(lo as f64),
            (Some(&lo), Some(&Reverse(hi))) => Some((lo + hi) as f64 / 2.0),
            (Some(&lo), None) => Some(lo as f64),
        }
    }
}

impl Default for RunningMedian {
    fn default() -> Self {
        Self::new()
    }
}
