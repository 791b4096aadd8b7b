//! Stable, comparator-ordered priority queue.
//!
//! `OrderedPriorityQueue` keeps its elements sorted by a [`Comparator`] and
//! always hands back the front of that order first. Elements that compare
//! equal leave in the order they were inserted.

pub mod comparator;
mod error;
pub mod queue;

pub use comparator::{ByKey, Comparator, Difference, Natural, Reversed};
pub use error::QueueError;
pub use queue::OrderedPriorityQueue;

pub type Result<T> = std::result::Result<T, QueueError>;
