/// Errors produced by queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("priority queue is empty")]
    Empty,
}
