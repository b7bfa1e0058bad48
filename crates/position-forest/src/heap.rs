//! Heap priority queue over an implicit-index backing vec.
//!
//! Same addressing scheme as the array tree: entry 1 is the minimum, the
//! children of index `i` are `2i` and `2i + 1`, index 0 is a permanent
//! sentinel. The backing vec is dense (`len == size + 1`), so growth is plain
//! push/pop and the heap-order invariant is the only structure maintained.

use std::cmp::Ordering;

use crate::error::HeapError;

/// Key/value pair stored in a [`HeapPriorityQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> Option<i32> {
    a.partial_cmp(b).map(|o| match o {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

/// Binary min-heap priority queue.
///
/// The comparator returns `None` for keys the order cannot compare; with the
/// default comparator that is how NaN keys get rejected at insert. Equal keys
/// are interchangeable: `min`/`remove_min` tie-breaking is unspecified and in
/// particular not insertion-stable.
pub struct HeapPriorityQueue<K, V, C = fn(&K, &K) -> Option<i32>>
where
    C: Fn(&K, &K) -> Option<i32>,
{
    // Slot 0 stays None; live entries occupy 1..=size.
    heap: Vec<Option<Entry<K, V>>>,
    comparator: C,
    size: usize,
}

impl<K: PartialOrd, V> HeapPriorityQueue<K, V, fn(&K, &K) -> Option<i32>> {
    /// Empty queue ordered by the keys' natural order.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: PartialOrd, V> Default for HeapPriorityQueue<K, V, fn(&K, &K) -> Option<i32>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> HeapPriorityQueue<K, V, C>
where
    C: Fn(&K, &K) -> Option<i32>,
{
    /// Empty queue ordered by a custom comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            heap: vec![None],
            comparator,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn key_at(&self, i: usize) -> &K {
        self.heap[i].as_ref().expect("occupied heap slot").key()
    }

    /// Whether the entry at `i` sorts strictly after the entry at `j`.
    fn greater(&self, i: usize, j: usize) -> bool {
        matches!(
            (self.comparator)(self.key_at(i), self.key_at(j)),
            Some(c) if c > 0
        )
    }

    /// Inserts a key/value pair and returns a borrow of the entry at its
    /// settled slot.
    pub fn insert(&mut self, key: K, value: V) -> Result<&Entry<K, V>, HeapError> {
        if (self.comparator)(&key, &key).is_none() {
            return Err(HeapError::InvalidKey);
        }
        self.heap.push(Some(Entry { key, value }));
        self.size += 1;
        // Sift up while the parent key is strictly greater.
        let mut i = self.size;
        while i / 2 >= 1 && self.greater(i / 2, i) {
            self.heap.swap(i / 2, i);
            i /= 2;
        }
        Ok(self.heap[i].as_ref().expect("entry just placed"))
    }

    /// Borrows the minimum entry without removing it.
    pub fn min(&self) -> Result<&Entry<K, V>, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyQueue);
        }
        Ok(self.heap[1].as_ref().expect("slot 1 holds the minimum"))
    }

    /// Removes and returns the minimum entry.
    pub fn remove_min(&mut self) -> Result<Entry<K, V>, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyQueue);
        }
        if self.size == 1 {
            self.size = 0;
            let min = self.heap.pop().flatten();
            return Ok(min.expect("slot 1 holds the minimum"));
        }
        let last = self
            .heap
            .pop()
            .flatten()
            .expect("last slot holds an entry");
        let min = self.heap[1].replace(last).expect("slot 1 holds the minimum");
        self.size -= 1;
        // Sift down along the smaller child.
        let mut i = 1;
        while 2 * i <= self.size {
            let mut j = 2 * i;
            if j + 1 <= self.size && self.greater(j, j + 1) {
                j += 1;
            }
            if self.greater(i, j) {
                self.heap.swap(i, j);
                i = j;
            } else {
                break;
            }
        }
        Ok(min)
    }
}
