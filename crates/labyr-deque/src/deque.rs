use std::fmt;

use crate::{DequeError, Iter};

/// Capacity of a freshly constructed (or cleared) deque.
pub const DEFAULT_CAPACITY: usize = 10;

/// A double-ended queue over a growable circular buffer.
///
/// The logical sequence occupies slots `(front + i) % capacity` for
/// `i` in `0..len`. Every slot outside that window is `None`, so no
/// removed element is retained by the buffer.
#[derive(Clone)]
pub struct CircularDeque<T> {
    slots: Vec<Option<T>>,
    len: usize,
    front: usize,
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularDeque<T> {
    /// Create an empty deque with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty deque with room for `capacity` elements before the
    /// first growth. A capacity of zero is rounded up to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            len: 0,
            front: 0,
        }
    }

    /// Number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert `element` before the current first element.
    pub fn add_first(&mut self, element: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let cap = self.capacity();
        self.front = (self.front + cap - 1) % cap;
        self.slots[self.front] = Some(element);
        self.len += 1;
    }

    /// Insert `element` after the current last element.
    pub fn add_last(&mut self, element: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let idx = (self.front + self.len) % self.capacity();
        self.slots[idx] = Some(element);
        self.len += 1;
    }

    /// Remove and return the first element.
    pub fn remove_first(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        let element = self.slots[self.front]
            .take()
            .ok_or(DequeError::EmptyCollection)?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        Ok(element)
    }

    /// Remove and return the last element.
    pub fn remove_last(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        let idx = self.back_index();
        let element = self.slots[idx].take().ok_or(DequeError::EmptyCollection)?;
        self.len -= 1;
        Ok(element)
    }

    /// Borrow the first element without removing it.
    pub fn peek_first(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        self.slots[self.front]
            .as_ref()
            .ok_or(DequeError::EmptyCollection)
    }

    /// Borrow the last element without removing it.
    pub fn peek_last(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyCollection);
        }
        self.slots[self.back_index()]
            .as_ref()
            .ok_or(DequeError::EmptyCollection)
    }

    /// Drop every element and shrink back to [`DEFAULT_CAPACITY`].
    ///
    /// Unlike the other operations this reallocates, so it costs O(capacity).
    pub fn clear(&mut self) {
        self.slots = empty_slots(DEFAULT_CAPACITY);
        self.len = 0;
        self.front = 0;
    }

    /// Iterate over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.front, self.len)
    }

    /// Slot holding the last element. Only meaningful when `len > 0`.
    ///
    /// `(front + len) % cap` is one past the last slot; when it is 0 the
    /// last element sits in the final slot of the buffer.
    #[inline]
    fn back_index(&self) -> usize {
        let cap = self.capacity();
        match (self.front + self.len) % cap {
            0 => cap - 1,
            end => end - 1,
        }
    }

    /// Double the capacity, moving the logical sequence to slots `0..len`.
    fn grow(&mut self) {
        let old_cap = self.capacity();
        let mut slots = empty_slots(old_cap * 2);
        for (i, slot) in slots.iter_mut().take(self.len).enumerate() {
            *slot = self.slots[(self.front + i) % old_cap].take();
        }
        self.slots = slots;
        self.front = 0;
        log::trace!("deque grew from {} to {} slots", old_cap, self.slots.len());
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<'a, T> IntoIterator for &'a CircularDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for CircularDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}

impl<T> FromIterator<T> for CircularDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: PartialEq> PartialEq for CircularDeque<T> {
    /// Two deques are equal when they hold equal elements in the same
    /// logical order, regardless of capacity or slot layout.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CircularDeque<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for CircularDeque<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    fn contents<T: Clone>(d: &CircularDeque<T>) -> Vec<T> {
        d.iter().cloned().collect()
    }

    #[test]
    fn new_is_empty() {
        let d: CircularDeque<i32> = CircularDeque::new();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.capacity(), DEFAULT_CAPACITY);
        assert_eq!(d.iter().count(), 0);
    }

    #[test]
    fn add_last_then_remove_first_is_fifo() {
        let mut d = CircularDeque::new();
        d.add_last("a");
        d.add_last("b");
        assert_eq!(d.remove_first(), Ok("a"));
        assert_eq!(d.remove_first(), Ok("b"));
        assert!(d.is_empty());
    }

    #[test]
    fn add_first_then_remove_first_is_lifo() {
        let mut d = CircularDeque::new();
        d.add_first("a");
        d.add_first("b");
        assert_eq!(d.remove_first(), Ok("b"));
        assert_eq!(d.remove_first(), Ok("a"));
    }

    #[test]
    fn remove_last_from_both_ends() {
        let mut d = CircularDeque::new();
        d.add_first(2);
        d.add_last(3);
        d.add_first(1);
        assert_eq!(contents(&d), vec![1, 2, 3]);
        assert_eq!(d.remove_last(), Ok(3));
        assert_eq!(d.remove_last(), Ok(2));
        assert_eq!(d.remove_last(), Ok(1));
        assert_eq!(d.remove_last(), Err(DequeError::EmptyCollection));
    }

    #[test]
    fn empty_operations_fail() {
        let mut d: CircularDeque<u8> = CircularDeque::new();
        assert_eq!(d.remove_first(), Err(DequeError::EmptyCollection));
        assert_eq!(d.remove_last(), Err(DequeError::EmptyCollection));
        assert_eq!(d.peek_first(), Err(DequeError::EmptyCollection));
        assert_eq!(d.peek_last(), Err(DequeError::EmptyCollection));
        // A failed removal leaves the deque usable.
        d.add_last(9);
        assert_eq!(d.peek_first(), Ok(&9));
    }

    #[test]
    fn peek_last_wraps_when_end_is_slot_zero() {
        // Filled exactly to capacity from front 0: one-past-the-end is slot 0.
        let mut d = CircularDeque::new();
        for i in 0..DEFAULT_CAPACITY {
            d.add_last(i);
        }
        assert_eq!(d.front, 0);
        assert_eq!(d.capacity(), DEFAULT_CAPACITY);
        assert_eq!(d.peek_last(), Ok(&(DEFAULT_CAPACITY - 1)));
        assert_eq!(d.remove_last(), Ok(DEFAULT_CAPACITY - 1));
        assert_eq!(d.peek_last(), Ok(&(DEFAULT_CAPACITY - 2)));
    }

    #[test]
    fn single_add_first_lands_in_last_slot() {
        let mut d = CircularDeque::new();
        d.add_first('x');
        assert_eq!(d.front, DEFAULT_CAPACITY - 1);
        assert_eq!(d.peek_first(), Ok(&'x'));
        assert_eq!(d.peek_last(), Ok(&'x'));
        assert_eq!(d.remove_last(), Ok('x'));
        assert!(d.is_empty());
    }

    #[test]
    fn peeks_do_not_mutate() {
        let mut d = CircularDeque::new();
        d.add_last(String::from("first"));
        d.add_last(String::from("last"));
        for _ in 0..3 {
            assert_eq!(d.peek_first().map(String::as_str), Ok("first"));
            assert_eq!(d.peek_last().map(String::as_str), Ok("last"));
        }
        assert_eq!(d.len(), 2);
        assert_eq!(contents(&d), vec!["first", "last"]);
    }

    #[test]
    fn removed_slots_are_cleared() {
        let mut d = CircularDeque::new();
        d.add_last(1);
        d.add_last(2);
        d.add_first(0);
        d.remove_first().unwrap();
        d.remove_last().unwrap();
        let occupied = d.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn growth_preserves_order_and_rebases_front() {
        let mut d = CircularDeque::new();
        // Wrap the front around the end of the buffer before growing.
        for i in (0..4).rev() {
            d.add_first(i);
        }
        for i in 4..DEFAULT_CAPACITY as i32 {
            d.add_last(i);
        }
        assert_eq!(d.len(), DEFAULT_CAPACITY);
        assert_ne!(d.front, 0);
        let before = contents(&d);

        d.add_last(DEFAULT_CAPACITY as i32);
        assert_eq!(d.capacity(), DEFAULT_CAPACITY * 2);
        assert_eq!(d.front, 0);
        let after = contents(&d);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after, (0..=DEFAULT_CAPACITY as i32).collect::<Vec<_>>());
    }

    #[test]
    fn growth_triggered_by_add_first() {
        let mut d = CircularDeque::new();
        for i in 0..25 {
            d.add_first(i);
        }
        assert_eq!(d.len(), 25);
        assert_eq!(d.capacity(), 40);
        assert_eq!(contents(&d), (0..25).rev().collect::<Vec<_>>());
        assert_eq!(d.peek_first(), Ok(&24));
        assert_eq!(d.peek_last(), Ok(&0));
    }

    #[test]
    fn with_capacity_zero_still_grows() {
        let mut d = CircularDeque::with_capacity(0);
        assert_eq!(d.capacity(), 1);
        d.add_last(1);
        d.add_last(2);
        d.add_first(0);
        assert_eq!(d.capacity(), 4);
        assert_eq!(contents(&d), vec![0, 1, 2]);
    }

    #[test]
    fn clear_resets_to_fresh_state() {
        let mut d = CircularDeque::new();
        for i in 0..30 {
            d.add_last(i);
        }
        d.clear();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.capacity(), DEFAULT_CAPACITY);
        assert_eq!(d.to_string(), "[]");

        d.add_first(7);
        d.add_last(8);
        assert_eq!(contents(&d), vec![7, 8]);
        assert_eq!(d, [7, 8].into_iter().collect::<CircularDeque<_>>());
    }

    #[test]
    fn display_renders_logical_order() {
        let mut d = CircularDeque::new();
        assert_eq!(d.to_string(), "[]");
        d.add_last("a");
        d.add_last("b");
        d.add_last("c");
        assert_eq!(d.to_string(), "[a, b, c]");
        d.add_first("z");
        assert_eq!(d.to_string(), "[z, a, b, c]");
        assert_eq!(format!("{d:?}"), r#"["z", "a", "b", "c"]"#);
    }

    #[test]
    fn iterator_is_front_to_back_and_fused() {
        let mut d = CircularDeque::new();
        for i in 0..5 {
            d.add_first(i);
        }
        let mut it = d.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.len(), 4);
        let rest: Vec<_> = it.by_ref().copied().collect();
        assert_eq!(rest, vec![3, 2, 1, 0]);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iterator_remove_is_unsupported() {
        let mut d = CircularDeque::new();
        d.add_last(1);
        let mut it = d.iter();
        it.next();
        assert_eq!(it.remove(), Err(DequeError::UnsupportedOperation));
        // The deque is untouched.
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn for_loop_over_reference() {
        let d: CircularDeque<i32> = (1..=4).collect();
        let mut sum = 0;
        for x in &d {
            sum += x;
        }
        assert_eq!(sum, 10);
    }

    #[test]
    fn equality_ignores_layout() {
        let mut a = CircularDeque::with_capacity(3);
        a.add_first(2);
        a.add_first(1);
        a.add_last(3);
        let b: CircularDeque<i32> = vec![1, 2, 3].into_iter().collect();
        assert_ne!(a.capacity(), b.capacity());
        assert_eq!(a, b);
        let c: CircularDeque<i32> = vec![1, 2].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn random_operations_match_vecdeque() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let mut d = CircularDeque::new();
            let mut model = VecDeque::new();
            let mut pushes = 0usize;
            let mut pops = 0usize;
            for _ in 0..400 {
                let v: u32 = rng.random();
                match rng.random_range(0..6u32) {
                    0 | 1 => {
                        d.add_first(v);
                        model.push_front(v);
                        pushes += 1;
                    }
                    2 | 3 => {
                        d.add_last(v);
                        model.push_back(v);
                        pushes += 1;
                    }
                    4 => {
                        let got = d.remove_first().ok();
                        let want = model.pop_front();
                        assert_eq!(got, want);
                        pops += usize::from(want.is_some());
                    }
                    _ => {
                        let got = d.remove_last().ok();
                        let want = model.pop_back();
                        assert_eq!(got, want);
                        pops += usize::from(want.is_some());
                    }
                }
                assert_eq!(d.len(), pushes - pops);
                assert_eq!(d.is_empty(), d.len() == 0);
                assert_eq!(d.peek_first().ok(), model.front());
                assert_eq!(d.peek_last().ok(), model.back());
            }
            assert!(d.iter().eq(model.iter()));
        }
    }
}
