//! Fixed-capacity array with shifting insert and delete.
//!
//! Variables:
//!   data : Vec<T>   - live elements, len <= C
//!   C    : usize    - capacity, immutable after with_capacity()
//!
//! Equations:
//!   insert_at(i, x): shift data[i..] right by one       O(N)
//!   remove_at(i):    shift data[i+1..] left by one      O(N)
//!   find(x):         linear scan                        O(N)
//!   get(i) / set(i,x)                                   O(1)

pub struct Array<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Array<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Append at the end. False when full.
    pub fn push(&mut self, val: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.data.push(val);
        true
    }

    /// Insert at `index`, shifting later elements right. False when full
    /// or the index is past the end.
    pub fn insert_at(&mut self, index: usize, val: T) -> bool {
        if self.is_full() || index > self.data.len() {
            return false;
        }
        self.data.insert(index, val);
        true
    }

    /// Remove at `index`, shifting later elements left.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        Some(self.data.remove(index))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn set(&mut self, index: usize, val: T) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = val;
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: PartialEq> Array<T> {
    /// Index of the first occurrence of `val`.
    pub fn find(&self, val: &T) -> Option<usize> {
        self.data.iter().position(|v| v == val)
    }
}
