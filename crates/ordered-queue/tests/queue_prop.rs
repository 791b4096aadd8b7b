//! Property-based tests for queue ordering and failure behavior.

use ordered_queue::{ByKey, OrderedPriorityQueue, QueueError, Reversed};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Remove,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i16>().prop_map(Op::Insert),
        2 => Just(Op::Remove),
    ]
}

proptest! {
    /// Draining always yields the input in sorted order.
    #[test]
    fn drain_matches_sorted_input(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut pq = OrderedPriorityQueue::new();
        for v in &values {
            pq.insert(*v);
        }
        let mut drained = Vec::new();
        while let Some(v) = pq.pop() {
            drained.push(v);
        }
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(drained, expected);
    }

    /// Reversed drain is non-increasing.
    #[test]
    fn reversed_drain_non_increasing(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut pq = OrderedPriorityQueue::with_comparator(Reversed(ordered_queue::Natural));
        for v in values {
            pq.insert(v);
        }
        let mut last = None;
        while let Ok(v) = pq.remove_highest() {
            if let Some(prev) = last {
                prop_assert!(prev >= v, "{} came out before {}", prev, v);
            }
            last = Some(v);
        }
    }

    /// Equal keys keep insertion order, which is what a stable sort gives.
    #[test]
    fn equal_keys_fifo(keys in prop::collection::vec(0u8..4, 0..100)) {
        let mut pq = OrderedPriorityQueue::with_comparator(ByKey::new(|e: &(u8, usize)| e.0));
        for (seq, key) in keys.iter().enumerate() {
            pq.insert((*key, seq));
        }
        let mut drained = Vec::new();
        while let Some(e) = pq.pop() {
            drained.push(e);
        }
        let mut expected: Vec<_> = keys.iter().copied().zip(0..).collect();
        expected.sort_by_key(|e| e.0);
        prop_assert_eq!(drained, expected);
    }

    /// Interleaved inserts and removals agree with a sorted reference, and
    /// removals on an empty queue change nothing.
    #[test]
    fn interleaved_ops_match_reference(ops in prop::collection::vec(op(), 0..300)) {
        let mut pq = OrderedPriorityQueue::new();
        let mut reference: Vec<i16> = Vec::new();
        let mut inserted = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Insert(v) => {
                    pq.insert(v);
                    let ix = reference.partition_point(|held| *held <= v);
                    reference.insert(ix, v);
                    inserted += 1;
                }
                Op::Remove => {
                    if reference.is_empty() {
                        prop_assert_eq!(pq.remove_highest(), Err(QueueError::Empty));
                    } else {
                        prop_assert_eq!(pq.remove_highest(), Ok(reference.remove(0)));
                        removed += 1;
                    }
                }
            }
            prop_assert_eq!(pq.len(), inserted - removed);
            prop_assert_eq!(pq.peek(), reference.first());
        }
    }
}
