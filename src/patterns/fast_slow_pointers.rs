//! Fast and slow pointers (Floyd's tortoise and hare).
//!
//! Lists here are index-linked: nodes live in a `Vec` and `next` is an
//! index, so a cycle is representable (owned `Box` links cannot close a
//! loop). The two cursors advance at speeds 1 and 2; if they meet, the
//! list has a cycle.
//!
//! Equations:
//!   slow' = next(slow),  fast' = next(next(fast))
//!   cycle       iff  exists step where slow == fast
//!   cycle start: restart one cursor at head, advance both by 1; the
//!                meeting point is the cycle entry.

struct Node<T> {
    val: T,
    next: Option<usize>,
}

/// Singly-linked list over an index arena. `next` edges may form a cycle.
pub struct IndexList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
}

impl<T> IndexList<T> {
    pub fn from_values(values: Vec<T>) -> Self {
        let n = values.len();
        let nodes = values
            .into_iter()
            .enumerate()
            .map(|(i, val)| Node {
                val,
                next: if i + 1 < n { Some(i + 1) } else { None },
            })
            .collect();
        Self {
            nodes,
            head: if n > 0 { Some(0) } else { None },
        }
    }

    /// Point the tail at the node at list position `pos`, closing a cycle.
    pub fn link_tail_to(&mut self, pos: usize) {
        if self.nodes.is_empty() {
            return;
        }
        let tail = self.nodes.len() - 1;
        self.nodes[tail].next = Some(pos);
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn next(&self, i: usize) -> Option<usize> {
        self.nodes[i].next
    }

    pub fn value(&self, i: usize) -> &T {
        &self.nodes[i].val
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Whether the list contains a cycle.
pub fn has_cycle<T>(list: &IndexList<T>) -> bool {
    meeting_point(list).is_some()
}

/// Index of the node where the cycle begins, if any.
pub fn find_cycle_start<T>(list: &IndexList<T>) -> Option<usize> {
    let meet = meeting_point(list)?;
    let mut a = list.head()?;
    let mut b = meet;
    while a != b {
        a = list.next(a)?;
        b = list.next(b)?;
    }
    Some(a)
}

/// Number of nodes on the cycle, if any.
pub fn cycle_length<T>(list: &IndexList<T>) -> Option<usize> {
    let meet = meeting_point(list)?;
    let mut len = 1;
    let mut cur = list.next(meet)?;
    while cur != meet {
        cur = list.next(cur)?;
        len += 1;
    }
    Some(len)
}

/// Middle node of an acyclic list (second of two middles for even length).
pub fn find_middle<T>(list: &IndexList<T>) -> Option<&T> {
    let mut slow = list.head()?;
    let mut fast = list.head()?;
    while let Some(f1) = list.next(fast) {
        slow = list.next(slow)?;
        match list.next(f1) {
            Some(f2) => fast = f2,
            None => break,
        }
    }
    Some(list.value(slow))
}

fn meeting_point<T>(list: &IndexList<T>) -> Option<usize> {
    let mut slow = list.head()?;
    let mut fast = list.head()?;
    loop {
        fast = list.next(fast)?;
        fast = list.next(fast)?;
        slow = list.next(slow)?;
        if slow == fast {
            return Some(slow);
        }
    }
}

/// Whether repeatedly summing squared digits of `n` reaches 1. The digit
/// sequence either reaches 1 or loops; the hare detects the loop.
pub fn is_happy(n: u32) -> bool {
    let mut slow = n;
    let mut fast = n;
    loop {
        slow = square_digit_sum(slow);
        fast = square_digit_sum(square_digit_sum(fast));
        if fast == 1 {
            return true;
        }
        if slow == fast {
            return slow == 1;
        }
    }
}

fn square_digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        let d = n % 10;
        sum += d * d;
        n /= 10;
    }
    sum
}

/// Whether an acyclic list reads the same forwards and backwards.
pub fn is_palindrome<T: PartialEq>(list: &IndexList<T>) -> bool {
    let mut values = Vec::with_capacity(list.len());
    let mut cur = list.head();
    while let Some(i) = cur {
        values.push(list.value(i));
        cur = list.next(i);
    }
    let n = values.len();
    (0..n / 2).all(|i| values[i] == values[n - 1 - i])
}
