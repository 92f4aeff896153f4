//! Doubly-linked list over an index arena.
//!
//! Back-pointers cannot be expressed with owned `Box` links, so nodes
//! live in a `Vec` slab and prev/next are indices; freed slots go on a
//! free list and are reused.
//!
//! Variables:
//!   nodes : Vec<Slot<T>>    - slab of occupied and vacant slots
//!   head, tail : Option<usize>
//!   free  : Vec<usize>      - vacant slot indices
//!
//! Equations:
//!   push_front/push_back/pop_front/pop_back    O(1)
//!   insert_at(i)/remove_at(i)                  O(i)
//!   find / rfind                               O(N)

struct Node<T> {
    val: T,
    prev: Option<usize>,
    next: Option<usize>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant,
}

pub struct DoublyLinkedList<T> {
    nodes: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
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

    pub fn push_front(&mut self, val: T) {
        let idx = self.alloc(Node {
            val,
            prev: None,
            next: self.head,
        });
        if let Some(old) = self.head {
            if let Some(node) = self.node_mut(old) {
                node.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, val: T) {
        let idx = self.alloc(Node {
            val,
            prev: self.tail,
            next: None,
        });
        if let Some(old) = self.tail {
            if let Some(node) = self.node_mut(old) {
                node.next = Some(idx);
            }
        }
        self.tail = Some(idx);
        if self.head.is_none() {
            self.head = Some(idx);
        }
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        Some(self.unlink(idx))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.tail?;
        Some(self.unlink(idx))
    }

    pub fn front(&self) -> Option<&T> {
        self.node(self.head?).map(|n| &n.val)
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
        let Some(at) = self.index_of_pos(pos) else {
            return false;
        };
        let prev = self.node(at).and_then(|n| n.prev);
        let idx = self.alloc(Node {
            val,
            prev,
            next: Some(at),
        });
        if let Some(p) = prev {
            if let Some(node) = self.node_mut(p) {
                node.next = Some(idx);
            }
        }
        if let Some(node) = self.node_mut(at) {
            node.prev = Some(idx);
        }
        self.len += 1;
        true
    }

    pub fn remove_at(&mut self, pos: usize) -> Option<T> {
        let idx = self.index_of_pos(pos)?;
        Some(self.unlink(idx))
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.node(self.index_of_pos(pos)?).map(|n| &n.val)
    }

    /// Reverse by swapping prev/next in every node.
    pub fn reverse(&mut self) {
        let mut cur = self.head;
        while let Some(idx) = cur {
            let next = match self.node_mut(idx) {
                Some(node) => {
                    std::mem::swap(&mut node.prev, &mut node.next);
                    node.prev
                }
                None => None,
            };
            cur = next;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
        }
    }

    /// Values tail to head.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            list: self,
            cur: self.tail,
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

    fn unlink(&mut self, idx: usize) -> T {
        let slot = std::mem::replace(&mut self.nodes[idx], Slot::Vacant);
        let node = match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant => unreachable!("unlink of vacant slot"),
        };
        match node.prev {
            Some(p) => {
                if let Some(prev) = self.node_mut(p) {
                    prev.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => {
                if let Some(next) = self.node_mut(n) {
                    next.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }
        self.free.push(idx);
        self.len -= 1;
        node.val
    }

    fn index_of_pos(&self, pos: usize) -> Option<usize> {
        if pos >= self.len {
            return None;
        }
        let mut cur = self.head;
        for _ in 0..pos {
            cur = self.node(cur?)?.next;
        }
        cur
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

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Position of `val` scanning from the head.
    pub fn find(&self, val: &T) -> Option<usize> {
        self.iter().position(|v| v == val)
    }

    /// Position of `val` scanning from the tail (still 0-based from the
    /// head).
    pub fn rfind(&self, val: &T) -> Option<usize> {
        let from_tail = self.iter_rev().position(|v| v == val)?;
        Some(self.len - 1 - from_tail)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cur: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.node(self.cur?)?;
        self.cur = node.next;
        Some(&node.val)
    }
}

pub struct IterRev<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cur: Option<usize>,
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.node(self.cur?)?;
        self.cur = node.prev;
        Some(&node.val)
    }
}
