use super::observer::Observer;
use core::mem::MaybeUninit;

/// Producer part of ring buffer.
pub trait Producer: Observer {
    /// Set write index.
    ///
    /// # Safety
    ///
    /// Index must go only forward, never backward. It is recommended to use [`Self::advance_write_index`] instead.
    ///
    /// All slots with index less than `value` must be initialized.
    unsafe fn set_write_index(&self, value: usize);

    /// Moves `write` pointer by `count` places forward.
    ///
    /// # Safety
    ///
    /// First `count` items in free space must be initialized.
    ///
    /// Must not be called concurrently.
    unsafe fn advance_write_index(&self, count: usize) {
        self.set_write_index(self.write_index().wrapping_add(count));
    }

    /// Appends an item to the ring buffer.
    ///
    /// If buffer is full returns an `Err` containing the item that hasn't been appended.
    fn try_push(&mut self, elem: Self::Item) -> Result<(), Self::Item> {
        if self.is_full() {
            return Err(elem);
        }
        unsafe {
            self.unsafe_slot(self.write_index()).write(MaybeUninit::new(elem));
            self.advance_write_index(1);
        }
        Ok(())
    }

    /// Appends an item to the ring buffer.
    ///
    /// Returns `false` if the buffer is full. Never waits for free space.
    #[inline]
    fn push(&mut self, elem: Self::Item) -> bool {
        self.try_push(elem).is_ok()
    }
}
