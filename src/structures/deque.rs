//! Deque - double-ended queue over a ring buffer, plus the monotonic
//! deque window problems.
//!
//! Variables:
//!   data  : Vec<Option<T>> - ring storage of capacity C
//!   front : usize          - index of the front element
//!   len   : usize
//!
//! Equations:
//!   push_front / push_back / pop_front / pop_back     O(1)
//!   sliding window max/min over N elements            O(N) total

use std::collections::VecDeque;

pub struct Deque<T> {
    data: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> Deque<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut data = Vec::with_capacity(capacity);
        data.resize_with(capacity, || None);
        Self {
            data,
            front: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    pub fn push_front(&mut self, val: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.front = (self.front + self.data.len() - 1) % self.data.len();
        self.data[self.front] = Some(val);
        self.len += 1;
        true
    }

    pub fn push_back(&mut self, val: T) -> bool {
        if self.is_full() {
            return false;
        }
        let back = (self.front + self.len) % self.data.len();
        self.data[back] = Some(val);
        self.len += 1;
        true
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let val = self.data[self.front].take();
        self.front = (self.front + 1) % self.data.len();
        self.len -= 1;
        val
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = (self.front + self.len - 1) % self.data.len();
        self.len -= 1;
        self.data[back].take()
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.data[self.front].as_ref()
    }

    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let back = (self.front + self.len - 1) % self.data.len();
        self.data[back].as_ref()
    }
}

/// Maximum of every window of size `k`. Monotonic decreasing deque of
/// indices; the front always holds the current maximum.
pub fn sliding_window_max(arr: &[i64], k: usize) -> Vec<i64> {
    window_extremes(arr, k, |a, b| a >= b)
}

/// Minimum of every window of size `k`.
pub fn sliding_window_min(arr: &[i64], k: usize) -> Vec<i64> {
    window_extremes(arr, k, |a, b| a <= b)
}

fn window_extremes(arr: &[i64], k: usize, keeps: impl Fn(i64, i64) -> bool) -> Vec<i64> {
    if k == 0 || k > arr.len() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(arr.len() - k + 1);
    let mut deque: VecDeque<usize> = VecDeque::new();
    for (i, &v) in arr.iter().enumerate() {
        while deque.front().is_some_and(|&f| f + k <= i) {
            deque.pop_front();
        }
        while deque.back().is_some_and(|&b| !keeps(arr[b], v)) {
            deque.pop_back();
        }
        deque.push_back(i);
        if i + 1 >= k {
            if let Some(&f) = deque.front() {
                out.push(arr[f]);
            }
        }
    }
    out
}

/// First negative number in every window of size `k`, None when the
/// window holds no negative.
pub fn first_negative_per_window(arr: &[i64], k: usize) -> Vec<Option<i64>> {
    if k == 0 || k > arr.len() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(arr.len() - k + 1);
    let mut negatives: VecDeque<usize> = VecDeque::new();
    for (i, &v) in arr.iter().enumerate() {
        if v < 0 {
            negatives.push_back(i);
        }
        while negatives.front().is_some_and(|&f| f + k <= i) {
            negatives.pop_front();
        }
        if i + 1 >= k {
            out.push(negatives.front().map(|&f| arr[f]));
        }
    }
    out
}

/// Palindrome check over alphanumeric characters only, case-insensitive.
/// Compares front against back until the deque is exhausted.
pub fn is_palindrome(text: &str) -> bool {
    let mut deque: VecDeque<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    while deque.len() > 1 {
        if deque.pop_front() != deque.pop_back() {
            return false;
        }
    }
    true
}
