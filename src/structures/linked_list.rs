//! Singly-linked list with owned nodes.
//!
//! Variables:
//!   head : Option<Box<Node<T>>>  - first node, None if empty
//!   N    : usize                 - number of nodes
//!
//! Equations:
//!   push_front(x): new.next = head, head = new, N' = N+1      O(1)
//!   pop_front():   head = head.next, N' = N-1                 O(1)
//!   push_back(x):  walk to tail, tail.next = new              O(N)
//!   reverse():     prev/cur pointer swap over the chain       O(N)

struct Node<T> {
    val: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, val: T) {
        let node = Box::new(Node {
            val,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, val: T) {
        let new_node = Box::new(Node { val, next: None });
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(new_node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.val
        })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        // walk to the link holding the last node
        let mut cur = &mut self.head;
        while cur.as_ref().map_or(false, |node| node.next.is_some()) {
            cur = &mut cur.as_mut()?.next;
        }
        let node = cur.take()?;
        self.len -= 1;
        Some(node.val)
    }

    /// Insert at position `index` (0-based). False past the end.
    pub fn insert_at(&mut self, index: usize, val: T) -> bool {
        if index > self.len {
            return false;
        }
        let mut cur = &mut self.head;
        for _ in 0..index {
            match cur {
                Some(node) => cur = &mut node.next,
                None => return false,
            }
        }
        let node = Box::new(Node {
            val,
            next: cur.take(),
        });
        *cur = Some(node);
        self.len += 1;
        true
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let mut cur = &mut self.head;
        for _ in 0..index {
            cur = &mut cur.as_mut()?.next;
        }
        cur.take().map(|node| {
            *cur = node.next;
            self.len -= 1;
            node.val
        })
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.val)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur?.next.as_deref();
        }
        cur.map(|n| &n.val)
    }

    /// Reverse in place by relinking nodes.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Value at the middle node (second of two middles for even length).
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref();
        let mut fast = self.head.as_deref();
        while let Some(f) = fast {
            match f.next.as_deref() {
                Some(f2) => {
                    fast = f2.next.as_deref();
                    slow = slow?.next.as_deref();
                }
                None => break,
            }
        }
        slow.map(|n| &n.val)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Position of the first occurrence of `val`.
    pub fn find(&self, val: &T) -> Option<usize> {
        let mut cur = self.head.as_deref();
        let mut i = 0;
        while let Some(node) = cur {
            if node.val == *val {
                return Some(i);
            }
            cur = node.next.as_deref();
            i += 1;
        }
        None
    }

    /// Remove the first node holding `val`. False if absent.
    pub fn remove_value(&mut self, val: &T) -> bool {
        let mut cur = &mut self.head;
        loop {
            let found = match cur.as_ref() {
                None => return false,
                Some(node) => node.val == *val,
            };
            if found {
                if let Some(node) = cur.take() {
                    *cur = node.next;
                }
                self.len -= 1;
                return true;
            }
            match cur {
                Some(node) => cur = &mut node.next,
                None => return false,
            }
        }
    }

    /// Collapse runs of equal adjacent values (full dedup when sorted).
    pub fn dedup_consecutive(&mut self) {
        let mut cur = &mut self.head;
        loop {
            let advance = match cur {
                Some(node) => match node.next.as_ref() {
                    Some(next) => node.val != next.val,
                    None => break,
                },
                None => break,
            };
            if advance {
                if let Some(node) = cur {
                    cur = &mut node.next;
                }
            } else if let Some(node) = cur.as_mut() {
                let next = node.next.take();
                if let Some(next) = next {
                    node.next = next.next;
                    self.len -= 1;
                }
            }
        }
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn from_slice(values: &[T]) -> Self {
        let mut list = Self::new();
        for v in values.iter().rev() {
            list.push_front(v.clone());
        }
        list
    }

    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            out.push(node.val.clone());
            cur = node.next.as_deref();
        }
        out
    }
}

impl<T: Ord> LinkedList<T> {
    /// Merge two sorted lists into one sorted list, consuming both.
    pub fn merge_sorted(mut a: Self, mut b: Self) -> Self {
        let mut merged = Self::new();
        let mut tail = &mut merged.head;
        let len = a.len + b.len;

        loop {
            let take_a = match (a.peek_front(), b.peek_front()) {
                (Some(x), Some(y)) => x <= y,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let node = if take_a {
                a.head.take().map(|mut n| {
                    a.head = n.next.take();
                    n
                })
            } else {
                b.head.take().map(|mut n| {
                    b.head = n.next.take();
                    n
                })
            };
            *tail = node;
            if let Some(n) = tail {
                tail = &mut n.next;
            }
        }
        merged.len = len;
        merged
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
