//! Circular singly-linked list over an index arena.
//!
//! Every occupied node's `next` points back into the circle, so a
//! traversal needs no end-of-list checks. The list keeps a handle to
//! the tail; the head is `next(tail)`, which makes both ends reachable
//! with a single pointer.
//!
//! Variables:
//!   nodes : Vec<Slot<T>>   - slab of occupied and vacant slots
//!   tail  : Option<usize>  - last node; head = next(tail)
//!   free  : Vec<usize>     - vacant slot indices
//!
//! Equations:
//!   push_front/push_back/pop_front/rotate   O(1)
//!   pop_back                                O(N)
//!   insert_at(i)/remove_at(i)               O(i)
//!   josephus(k)                             O(N * k)

struct Node<T> {
    val: T,
    next: usize,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant,
}

pub struct CircularList<T> {
    nodes: Vec<Slot<T>>,
    tail: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            tail: None,
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_back(&mut self, val: T) {
        let idx = self.link_after_tail(val);
        self.tail = Some(idx);
    }

    pub fn push_front(&mut self, val: T) {
        let idx = self.link_after_tail(val);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let tail = self.tail?;
        let head = self.next_of(tail);
        if self.len == 1 {
            self.tail = None;
        } else {
            let new_head = self.next_of(head);
            if let Some(node) = self.node_mut(tail) {
                node.next = new_head;
            }
        }
        Some(self.release(head))
    }

    /// O(N): the predecessor of the tail must be found by walking.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.len == 1 {
            self.tail = None;
            return Some(self.release(tail));
        }
        let mut prev = self.next_of(tail);
        while self.next_of(prev) != tail {
            prev = self.next_of(prev);
        }
        let head = self.next_of(tail);
        if let Some(node) = self.node_mut(prev) {
            node.next = head;
        }
        self.tail = Some(prev);
        Some(self.release(tail))
    }

    pub fn front(&self) -> Option<&T> {
        self.node(self.next_of(self.tail?)).map(|n| &n.val)
    }

    pub fn back(&self) -> Option<&T> {
        self.node(self.tail?).map(|n| &n.val)
    }

    /// Insert at list position `pos` (0-based from the head).
    pub fn insert_at(&mut self, pos: usize, val: T) -> bool {
        if pos > self.len {
            return false;
        }
        if pos == 0 {
            self.push_front(val);
            return true;
        }
        if pos == self.len {
            self.push_back(val);
            return true;
        }
        let Some(prev) = self.index_of_pos(pos - 1) else {
            return false;
        };
        let next = self.next_of(prev);
        let idx = self.alloc(Node { val, next });
        if let Some(node) = self.node_mut(prev) {
            node.next = idx;
        }
        self.len += 1;
        true
    }

    pub fn remove_at(&mut self, pos: usize) -> Option<T> {
        if pos >= self.len {
            return None;
        }
        if pos == 0 {
            return self.pop_front();
        }
        let prev = self.index_of_pos(pos - 1)?;
        let at = self.next_of(prev);
        let next = self.next_of(at);
        if let Some(node) = self.node_mut(prev) {
            node.next = next;
        }
        if self.tail == Some(at) {
            self.tail = Some(prev);
        }
        Some(self.release(at))
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.node(self.index_of_pos(pos)?).map(|n| &n.val)
    }

    /// Advance the head by one; the old head becomes the tail. O(1).
    pub fn rotate(&mut self) {
        if let Some(tail) = self.tail {
            self.tail = Some(self.next_of(tail));
        }
    }

    /// Values for one full circle, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.tail.map(|t| self.next_of(t)),
            remaining: self.len,
        }
    }

    /// Round-robin elimination: repeatedly count `k` nodes around the
    /// circle and remove the k-th, until the circle is empty. Returns
    /// the elimination order; `k == 0` eliminates nobody.
    pub fn josephus(mut self, k: usize) -> Vec<T> {
        if k == 0 {
            return Vec::new();
        }
        let mut order = Vec::with_capacity(self.len);
        let Some(mut prev) = self.tail else {
            return order;
        };
        let mut cur = self.next_of(prev);
        while self.len > 1 {
            for _ in 0..k - 1 {
                prev = cur;
                cur = self.next_of(cur);
            }
            let next = self.next_of(cur);
            if self.tail == Some(cur) {
                self.tail = Some(prev);
            }
            if let Some(node) = self.node_mut(prev) {
                node.next = next;
            }
            order.push(self.release(cur));
            cur = next;
        }
        if let Some(last) = self.tail.take() {
            order.push(self.release(last));
        }
        order
    }

    /// Splice a node in right after the tail (the head slot); the caller
    /// decides whether the tail handle moves to it.
    fn link_after_tail(&mut self, val: T) -> usize {
        match self.tail {
            None => {
                let idx = self.alloc(Node { val, next: 0 });
                if let Some(node) = self.node_mut(idx) {
                    node.next = idx;
                }
                self.len += 1;
                idx
            }
            Some(tail) => {
                let head = self.next_of(tail);
                let idx = self.alloc(Node { val, next: head });
                if let Some(node) = self.node_mut(tail) {
                    node.next = idx;
                }
                self.len += 1;
                idx
            }
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.nodes.push(Slot::Occupied(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> T {
        let slot = std::mem::replace(&mut self.nodes[idx], Slot::Vacant);
        let node = match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("release of vacant slot"),
        };
        self.free.push(idx);
        self.len -= 1;
        node.val
    }

    fn index_of_pos(&self, pos: usize) -> Option<usize> {
        if pos >= self.len {
            return None;
        }
        let mut cur = self.next_of(self.tail?);
        for _ in 0..pos {
            cur = self.next_of(cur);
        }
        Some(cur)
    }

    fn next_of(&self, idx: usize) -> usize {
        self.node(idx).map(|n| n.next).unwrap_or(idx)
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        match self.nodes.get(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        match self.nodes.get_mut(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }
}

impl<T: PartialEq> CircularList<T> {
    /// Position of `val` in one circle from the head.
    pub fn find(&self, val: &T) -> Option<usize> {
        self.iter().position(|v| v == val)
    }
}

impl<T: Clone> CircularList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for val in iter {
            list.push_back(val);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    cur: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.cur?)?;
        self.remaining -= 1;
        self.cur = Some(node.next);
        Some(&node.val)
    }
}
