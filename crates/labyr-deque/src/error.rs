use std::fmt;

/// Errors reported by [`CircularDeque`](crate::CircularDeque) and its iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// A removal or peek was attempted on a deque with no elements.
    EmptyCollection,
    /// The requested capability is not provided (removal through an iterator).
    UnsupportedOperation,
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "deque is empty"),
            Self::UnsupportedOperation => {
                write!(f, "removal through a deque iterator is not supported")
            }
        }
    }
}

impl std::error::Error for DequeError {}
