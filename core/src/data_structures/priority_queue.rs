//! Min-priority queue with deterministic ordering
//!
//! A binary heap keyed by an arbitrary `Ord` priority. Entries with equal
//! keys pop in insertion order, so pop order is fully determined by the
//! sequence of pushes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Total order over `f64` for use in heap keys
///
/// Uses IEEE 754 `totalOrder`; NaN sorts after every finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatOrd(pub f64);

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct HeapEntry<K, V> {
    key: K,
    sequence: u64,
    value: V,
}

impl<K: Ord, V> PartialEq for HeapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.sequence == other.sequence
    }
}

impl<K: Ord, V> Eq for HeapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for HeapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for HeapEntry<K, V> {
    // Reversed: BinaryHeap is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Binary min-heap popping the smallest key first
#[derive(Debug)]
pub struct MinPriorityQueue<K: Ord, V> {
    heap: BinaryHeap<HeapEntry<K, V>>,
    next_sequence: u64,
}

impl<K: Ord, V> MinPriorityQueue<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Inserts `value` with priority `key`
    pub fn push(&mut self, key: K, value: V) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(HeapEntry { key, sequence, value });
    }

    /// Removes the entry with the smallest key
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.heap.pop().map(|entry| (entry.key, entry.value))
    }

    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: Ord, V> Default for MinPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_key_first() {
        let mut queue = MinPriorityQueue::new();
        queue.push(FloatOrd(3.5), "c");
        queue.push(FloatOrd(1.0), "a");
        queue.push(FloatOrd(2.25), "b");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek_key(), Some(&FloatOrd(1.0)));
        assert_eq!(queue.pop(), Some((FloatOrd(1.0), "a")));
        assert_eq!(queue.pop(), Some((FloatOrd(2.25), "b")));
        assert_eq!(queue.pop(), Some((FloatOrd(3.5), "c")));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_keys_pop_in_insertion_order() {
        let mut queue = MinPriorityQueue::new();
        for value in ["first", "second", "third"] {
            queue.push(7_u32, value);
        }

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|(_, v)| v)).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_tuple_keys_break_ties_on_second_component() {
        let mut queue = MinPriorityQueue::new();
        queue.push((FloatOrd(10.0), "Zerind"), 1);
        queue.push((FloatOrd(10.0), "Arad"), 2);
        queue.push((FloatOrd(9.0), "Sibiu"), 3);

        assert_eq!(queue.pop().map(|(_, v)| v), Some(3));
        assert_eq!(queue.pop().map(|(_, v)| v), Some(2));
        assert_eq!(queue.pop().map(|(_, v)| v), Some(1));
    }

    #[test]
    fn test_float_ord_total_order() {
        assert!(FloatOrd(-0.5) < FloatOrd(0.0));
        assert!(FloatOrd(1.0) < FloatOrd(f64::NAN));
        assert_eq!(FloatOrd(2.0).cmp(&FloatOrd(2.0)), Ordering::Equal);
    }
}
