use crate::capacity;
use core::{mem::MaybeUninit, num::NonZeroUsize};

/// Ring buffer observer.
///
/// Can observe ring buffer state but cannot safely access its data.
pub trait Observer {
    /// Stored item. Items are plain data: copied in and out of slots, never dropped.
    type Item: Copy;

    /// Capacity of the ring buffer.
    ///
    /// It is constant during the whole ring buffer lifetime and is always a power of two.
    fn capacity(&self) -> NonZeroUsize;

    /// Count of items ever read from the ring buffer.
    ///
    /// Wraps around at `usize::MAX`.
    fn read_index(&self) -> usize;
    /// Count of items ever written to the ring buffer.
    ///
    /// Wraps around at `usize::MAX`.
    fn write_index(&self) -> usize;

    /// Pointer to the slot that `index` maps to.
    ///
    /// This is the only way slot memory is reached.
    ///
    /// # Safety
    ///
    /// Slot may be written only by the producer and only while it lies outside `read_index..write_index`.
    /// Slot may be read only by the consumer and only while it lies inside `read_index..write_index`
    /// as observed after an acquiring load of the write index.
    unsafe fn unsafe_slot(&self, index: usize) -> *mut MaybeUninit<Self::Item>;

    /// Whether read end is held by consumer.
    fn read_is_held(&self) -> bool;
    /// Whether write end is held by producer.
    fn write_is_held(&self) -> bool;

    /// The number of items stored in the buffer.
    ///
    /// *Actual number may be greater or less than returned value due to concurring activity of producer or consumer respectively.*
    fn occupied_len(&self) -> usize {
        // Read index is loaded first so that the difference is never negative.
        let read = self.read_index();
        capacity::occupied(self.capacity(), read, self.write_index())
    }

    /// The number of remaining free places in the buffer.
    ///
    /// *Actual number may be greater or less than returned value due to concurring activity of consumer or producer respectively.*
    fn vacant_len(&self) -> usize {
        self.capacity().get() - self.occupied_len()
    }

    /// Checks if the ring buffer is empty.
    ///
    /// *The result may become irrelevant at any time because of concurring producer activity.*
    #[inline]
    fn is_empty(&self) -> bool {
        self.occupied_len() == 0
    }

    /// Checks if the ring buffer is full.
    ///
    /// *The result may become irrelevant at any time because of concurring consumer activity.*
    #[inline]
    fn is_full(&self) -> bool {
        self.vacant_len() == 0
    }
}
