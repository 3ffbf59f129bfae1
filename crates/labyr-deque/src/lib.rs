//! A double-ended queue backed by a growable circular buffer.
//!
//! [`CircularDeque`] stores its elements in a fixed-capacity slot array
//! addressed with modular arithmetic, so both ends can grow and shrink
//! without shifting elements. When an insertion would overflow, the
//! capacity doubles and the logical sequence is re-based to slot 0.
//!
//! | Operation | Cost |
//! |---|---|
//! | [`add_first`](CircularDeque::add_first), [`add_last`](CircularDeque::add_last) | amortized O(1) |
//! | [`remove_first`](CircularDeque::remove_first), [`remove_last`](CircularDeque::remove_last) | O(1) |
//! | [`peek_first`](CircularDeque::peek_first), [`peek_last`](CircularDeque::peek_last) | O(1) |
//! | [`clear`](CircularDeque::clear), `Display` | O(n) |

mod deque;
mod error;
mod iter;

pub use deque::{CircularDeque, DEFAULT_CAPACITY};
pub use error::DequeError;
pub use iter::Iter;
