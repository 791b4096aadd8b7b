use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::comparator::{Comparator, Natural};
use crate::error::QueueError;

/// A priority queue that keeps its elements sorted by a comparator.
///
/// The front of the comparator order is extracted first, so with the
/// default [`Natural`] comparator the smallest element comes out first.
/// Wrap the comparator in [`Reversed`](crate::Reversed) for largest-first.
///
/// The queue is stable: items that compare equal come out in insertion
/// order.
pub struct OrderedPriorityQueue<T, C = Natural> {
    items: VecDeque<T>,
    compare: C,
}

impl<T: Ord> OrderedPriorityQueue<T> {
    /// Create an empty queue ordered by `T: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C: Comparator<T>> OrderedPriorityQueue<T, C> {
    /// Create an empty queue ordered by `compare`.
    /// Items that compare as `Less` are extracted first.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            items: VecDeque::new(),
            compare,
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            compare,
        }
    }

    /// Index of the first held item ordered strictly after `item`.
    fn insertion_point(&self, item: &T) -> usize {
        self.items
            .partition_point(|held| self.compare.compare(held, item) != Ordering::Greater)
    }

    /// Add an item, placing it after every item it compares equal to.
    pub fn insert(&mut self, item: T) {
        let ix = self.insertion_point(&item);
        self.items.insert(ix, item);
    }

    /// Remove and return the front item.
    ///
    /// Fails with [`QueueError::Empty`] if there is nothing to remove; the
    /// queue is left as it was.
    pub fn remove_highest(&mut self) -> Result<T, QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    /// Like [`remove_highest`](Self::remove_highest), but returns `None`
    /// on an empty queue.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Peek at the front item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }
}

impl<T, C: Comparator<T> + Default> Default for OrderedPriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedPriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedPriorityQueue")
            .field("len", &self.items.len())
            .field("items", &self.items)
            .finish()
    }
}
