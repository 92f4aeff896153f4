//! Queue - FIFO over a fixed ring buffer, plus queue applications.
//!
//! Variables:
//!   data  : Vec<Option<T>> - ring storage of capacity C
//!   front : usize          - index of the oldest element
//!   len   : usize          - number of live elements
//!
//! Equations:
//!   enqueue(x): data[(front + len) % C] = x, len' = len + 1   O(1)
//!   dequeue():  front' = (front + 1) % C,    len' = len - 1   O(1)

use std::collections::VecDeque;

pub struct Queue<T> {
    data: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> Queue<T> {
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

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Append at the back. False when full.
    pub fn enqueue(&mut self, val: T) -> bool {
        if self.is_full() {
            return false;
        }
        let back = (self.front + self.len) % self.data.len();
        self.data[back] = Some(val);
        self.len += 1;
        true
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let val = self.data[self.front].take();
        self.front = (self.front + 1) % self.data.len();
        self.len -= 1;
        val
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.data[self.front].as_ref()
    }
}

/// Binary representations of 1..=n, generated by a queue: dequeue a
/// string, emit it, enqueue it with "0" and "1" appended.
pub fn generate_binary_numbers(n: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(n);
    let mut queue = VecDeque::new();
    queue.push_back("1".to_string());
    for _ in 0..n {
        if let Some(s) = queue.pop_front() {
            queue.push_back(format!("{s}0"));
            queue.push_back(format!("{s}1"));
            out.push(s);
        }
    }
    out
}

/// After each character of `stream`, the first character seen exactly
/// once so far, or None when every character repeats.
pub fn first_non_repeating(stream: &str) -> Vec<Option<char>> {
    let mut counts = std::collections::HashMap::new();
    let mut queue = VecDeque::new();
    let mut out = Vec::new();
    for c in stream.chars() {
        *counts.entry(c).or_insert(0u32) += 1;
        queue.push_back(c);
        while queue
            .front()
            .is_some_and(|f| counts.get(f).copied().unwrap_or(0) > 1)
        {
            queue.pop_front();
        }
        out.push(queue.front().copied());
    }
    out
}

/// Interleave the first half of the queue with the second half.
/// [1,2,3,4] becomes [1,3,2,4]. Odd leftover stays at the back.
pub fn interleave_halves<T>(queue: &mut VecDeque<T>) {
    let half = queue.len() / 2;
    let back: Vec<T> = queue.split_off(half).into_iter().collect();
    let front: Vec<T> = std::mem::take(queue).into_iter().collect();
    let mut back = back.into_iter();
    for f in front {
        queue.push_back(f);
        if let Some(b) = back.next() {
            queue.push_back(b);
        }
    }
    queue.extend(back);
}
