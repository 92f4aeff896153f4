//! In-place reversal of a singly-linked list with owned nodes.
//!
//! Variables:
//!   head : Link<T> = Option<Box<ListNode<T>>>
//!
//! Equations:
//!   reverse: repeatedly  head = node.next, node.next = prev, prev = node
//!            O(n) time, O(1) extra space (node boxes are reused, not
//!            reallocated)
//!
//! Positions are 1-based, matching the usual statement of the problems.

pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

pub type Link<T> = Option<Box<ListNode<T>>>;

pub fn from_slice<T: Clone>(values: &[T]) -> Link<T> {
    let mut head = None;
    for v in values.iter().rev() {
        head = Some(Box::new(ListNode {
            val: v.clone(),
            next: head,
        }));
    }
    head
}

pub fn to_vec<T: Clone>(head: &Link<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut cur = head;
    while let Some(node) = cur {
        out.push(node.val.clone());
        cur = &node.next;
    }
    out
}

pub fn length<T>(head: &Link<T>) -> usize {
    let mut n = 0;
    let mut cur = head;
    while let Some(node) = cur {
        n += 1;
        cur = &node.next;
    }
    n
}

/// Reverse the whole list.
pub fn reverse<T>(mut head: Link<T>) -> Link<T> {
    let mut prev = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// Reverse the nodes at positions `p..=q` (1-based), leaving the rest of
/// the list untouched.
pub fn reverse_sublist<T>(head: Link<T>, p: usize, q: usize) -> Link<T> {
    if p == 0 || p >= q {
        return head;
    }
    if p == 1 {
        return reverse_first_n(head, q);
    }
    match head {
        None => None,
        Some(mut node) => {
            node.next = reverse_sublist(node.next.take(), p - 1, q - 1);
            Some(node)
        }
    }
}

/// Reverse every group of `k` consecutive nodes, including a final
/// partial group.
pub fn reverse_every_k<T>(head: Link<T>, k: usize) -> Link<T> {
    if k <= 1 || head.is_none() {
        return head;
    }
    let (mut group, rest) = reverse_n_detached(head, k);
    let rest = reverse_every_k(rest, k);
    let tail = tail_link(&mut group);
    *tail = rest;
    group
}

/// Reverse the first `k` nodes, skip the next `k`, and repeat.
pub fn reverse_alternate_k<T>(head: Link<T>, k: usize) -> Link<T> {
    if k == 0 || head.is_none() {
        return head;
    }
    let (mut group, rest) = reverse_n_detached(head, k);
    let mut link = tail_link(&mut group);
    *link = rest;

    let mut skipped = 0;
    while skipped < k {
        match link {
            Some(node) => {
                link = &mut node.next;
                skipped += 1;
            }
            None => break,
        }
    }
    let next_group = link.take();
    *link = reverse_alternate_k(next_group, k);
    group
}

/// Rotate the list right by `k`: the last `k % len` nodes move to the
/// front in order.
pub fn rotate<T>(mut head: Link<T>, k: usize) -> Link<T> {
    let n = length(&head);
    if n == 0 || k % n == 0 {
        return head;
    }
    let split = n - k % n;

    let mut link = &mut head;
    for _ in 0..split {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    let mut rotated = link.take();
    let tail = tail_link(&mut rotated);
    *tail = head;
    rotated
}

/// Reverse the first `n` nodes and reattach whatever follows them.
fn reverse_first_n<T>(head: Link<T>, n: usize) -> Link<T> {
    let (mut rev, rest) = reverse_n_detached(head, n);
    let tail = tail_link(&mut rev);
    *tail = rest;
    rev
}

/// Reverse up to `n` nodes; returns the reversed chain and the detached
/// remainder.
fn reverse_n_detached<T>(mut head: Link<T>, n: usize) -> (Link<T>, Link<T>) {
    let mut prev = None;
    let mut taken = 0;
    while taken < n {
        match head {
            Some(mut node) => {
                head = node.next.take();
                node.next = prev;
                prev = Some(node);
                taken += 1;
            }
            None => break,
        }
    }
    (prev, head)
}

fn tail_link<T>(head: &mut Link<T>) -> &mut Link<T> {
    let mut link = head;
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}
