use super::observer::Observer;

/// Consumer part of ring buffer.
pub trait Consumer: Observer {
    /// Set read index.
    ///
    /// # Safety
    ///
    /// Index must go only forward, never backward. It is recommended to use [`Self::advance_read_index`] instead.
    ///
    /// Slots with index less than `value` are handed back to the producer and must not be read anymore.
    unsafe fn set_read_index(&self, value: usize);

    /// Moves `read` pointer by `count` places forward.
    ///
    /// # Safety
    ///
    /// There must be at least `count` occupied items.
    ///
    /// Must not be called concurrently.
    unsafe fn advance_read_index(&self, count: usize) {
        self.set_read_index(self.read_index().wrapping_add(count));
    }

    /// Reference to the oldest item in the ring buffer.
    ///
    /// Returns `None` if the ring buffer is empty.
    ///
    /// Takes `&mut self` so that the item cannot be reached through a shared reference.
    /// Otherwise a ring buffer lent to its producer and consumer could still hand out a reference
    /// to a slot that the consumer frees and the producer overwrites:
    ///
    /// ```compile_fail
    /// # use cmdring::{traits::*, CachingCons, CachingProd, StaticRb};
    /// let mut rb = StaticRb::<i32, 4>::default();
    /// let mut prod = CachingProd::new(&rb);
    /// let mut cons = CachingCons::new(&rb);
    ///
    /// assert!(prod.push(1));
    /// let front = rb.front().unwrap();
    /// assert!(cons.pop());
    /// assert!(prod.push(99));
    /// assert_eq!(*front, 1);
    /// ```
    fn front(&mut self) -> Option<&Self::Item> {
        if self.is_empty() {
            return None;
        }
        Some(unsafe { (*self.unsafe_slot(self.read_index())).assume_init_ref() })
    }

    /// Removes the oldest item from the ring buffer.
    ///
    /// Returns `false` if the ring buffer is empty.
    fn pop(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        unsafe { self.advance_read_index(1) };
        true
    }

    /// Removes the oldest item from the ring buffer and returns it.
    ///
    /// Returns `None` if the ring buffer is empty.
    fn try_pop(&mut self) -> Option<Self::Item> {
        let elem = *self.front()?;
        self.pop();
        Some(elem)
    }

    /// Returns an iterator that removes items one by one from the ring buffer.
    ///
    /// Only items that are present at the moment of the call are yielded,
    /// so a busy producer cannot keep the iterator running forever.
    fn pop_iter(&mut self) -> PopIter<'_, Self> {
        PopIter::new(self)
    }

    /// Removes at most `count` and at least `min(count, Self::occupied_len())` items from the buffer.
    ///
    /// If there is no concurring producer activity then exactly `min(count, Self::occupied_len())` items are removed.
    ///
    /// Returns the number of deleted items.
    ///
    /// ```
    /// # extern crate cmdring;
    /// # use cmdring::{StaticRb, traits::*};
    /// # fn main() {
    /// let mut rb = StaticRb::<i32, 8>::default();
    /// let (mut prod, mut cons) = rb.split_ref();
    ///
    /// for i in 0..8 {
    ///     assert!(prod.push(i));
    /// }
    ///
    /// assert_eq!(cons.skip(4), 4);
    /// assert_eq!(cons.skip(8), 4);
    /// assert_eq!(cons.skip(4), 0);
    /// # }
    /// ```
    fn skip(&mut self, count: usize) -> usize {
        let actual_count = usize::min(count, self.occupied_len());
        unsafe { self.advance_read_index(actual_count) };
        actual_count
    }

    /// Removes all items from the buffer.
    ///
    /// Returns the number of deleted items.
    fn clear(&mut self) -> usize {
        self.skip(usize::MAX)
    }
}

/// An iterator that removes items from the ring buffer.
pub struct PopIter<'a, C: Consumer + ?Sized> {
    target: &'a mut C,
    len: usize,
}

impl<'a, C: Consumer + ?Sized> PopIter<'a, C> {
    pub fn new(target: &'a mut C) -> Self {
        Self {
            len: target.occupied_len(),
            target,
        }
    }
}

impl<'a, C: Consumer + ?Sized> Iterator for PopIter<'a, C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.target.try_pop()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, C: Consumer + ?Sized> ExactSizeIterator for PopIter<'a, C> {}
