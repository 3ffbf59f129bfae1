use std::iter::FusedIterator;

use crate::DequeError;

/// Forward iterator over a [`CircularDeque`](crate::CircularDeque), front to back.
///
/// Created by [`CircularDeque::iter`](crate::CircularDeque::iter). It walks
/// the slot array with the same modular indexing as the deque and yields
/// exactly as many elements as the deque held when the iterator was made.
/// Once exhausted it stays exhausted.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    index: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], front: usize, len: usize) -> Self {
        Self {
            slots,
            index: front,
            remaining: len,
        }
    }

    /// Remove the most recently yielded element.
    ///
    /// Not supported: always returns [`DequeError::UnsupportedOperation`].
    pub fn remove(&mut self) -> Result<(), DequeError> {
        Err(DequeError::UnsupportedOperation)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.slots[self.index].as_ref();
        self.index = (self.index + 1) % self.slots.len();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
