//! Caching producer and consumer.
//!
//! Each wrapper owns its own index and keeps a copy of the opposite one.
//! The copy is refreshed from the ring buffer only when it makes the buffer look full (for producer)
//! or empty (for consumer), so in the common case an operation touches nothing the other thread writes,
//! apart from the slot itself.

use super::obs::Obs;
use crate::{
    rb::RbRef,
    trace::trace,
    traits::{Consumer, Observer, Producer, RingBuffer},
};
use core::{cell::Cell, mem::MaybeUninit, num::NonZeroUsize};
use crossbeam_utils::CachePadded;

/// Indices as seen by one end of the ring buffer.
///
/// One of them belongs to the end itself and is always exact, the other is a possibly stale copy.
struct Indices {
    read: Cell<usize>,
    write: Cell<usize>,
}

/// Caching wrapper of ring buffer.
///
/// Wrapper is `Send` but not `Sync`: it may be moved to another thread but must not be shared.
pub struct Caching<R: RbRef, const P: bool, const C: bool> {
    rb: R,
    indices: CachePadded<Indices>,
}

/// Write end of a ring buffer.
///
/// At most one producer may exist for a ring buffer at a time.
pub type CachingProd<R> = Caching<R, true, false>;
/// Read end of a ring buffer.
///
/// At most one consumer may exist for a ring buffer at a time.
pub type CachingCons<R> = Caching<R, false, true>;

impl<R: RbRef, const P: bool, const C: bool> Caching<R, P, C> {
    /// Create a new ring buffer caching wrapper.
    ///
    /// Panics if wrapper with matching rights already exists.
    pub fn new(rb: R) -> Self {
        if P {
            assert!(!unsafe { rb.rb().hold_write(true) }, "ring buffer producer already exists");
        }
        if C {
            assert!(!unsafe { rb.rb().hold_read(true) }, "ring buffer consumer already exists");
        }
        trace!(producer = P, consumer = C, "ring buffer end acquired");
        Self {
            indices: CachePadded::new(Indices {
                read: Cell::new(rb.rb().read_index()),
                write: Cell::new(rb.rb().write_index()),
            }),
            rb,
        }
    }

    /// Get ring buffer observer.
    pub fn observe(&self) -> Obs<R> {
        Obs::new(self.rb.clone())
    }

    /// Fetch the opposite index from the ring buffer.
    #[inline]
    fn fetch(&self) {
        if P {
            self.indices.read.set(self.rb.rb().read_index());
        }
        if C {
            self.indices.write.set(self.rb.rb().write_index());
        }
    }

    #[inline]
    fn cached_len(&self) -> usize {
        self.indices.write.get().wrapping_sub(self.indices.read.get())
    }
}

impl<R: RbRef, const P: bool, const C: bool> Observer for Caching<R, P, C> {
    type Item = <R::Rb as Observer>::Item;

    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.rb.rb().capacity()
    }

    #[inline]
    fn read_index(&self) -> usize {
        if P {
            self.fetch();
        }
        self.indices.read.get()
    }
    #[inline]
    fn write_index(&self) -> usize {
        if C {
            self.fetch();
        }
        self.indices.write.get()
    }

    #[inline]
    unsafe fn unsafe_slot(&self, index: usize) -> *mut MaybeUninit<Self::Item> {
        self.rb.rb().unsafe_slot(index)
    }

    #[inline]
    fn read_is_held(&self) -> bool {
        self.rb.rb().read_is_held()
    }
    #[inline]
    fn write_is_held(&self) -> bool {
        self.rb.rb().write_is_held()
    }
}

impl<R: RbRef> CachingProd<R> {
    /// Whether there is at least one vacant slot.
    ///
    /// Looks at the shared read index only when the cached one says that the buffer is full.
    #[inline]
    fn has_vacant(&self) -> bool {
        let capacity = self.capacity().get();
        if self.cached_len() < capacity {
            return true;
        }
        self.fetch();
        self.cached_len() < capacity
    }
}

impl<R: RbRef> Producer for CachingProd<R> {
    #[inline]
    unsafe fn set_write_index(&self, value: usize) {
        self.indices.write.set(value);
        self.rb.rb().set_write_index(value);
    }

    fn try_push(&mut self, elem: Self::Item) -> Result<(), Self::Item> {
        if !self.has_vacant() {
            return Err(elem);
        }
        let write = self.indices.write.get();
        unsafe {
            // Slot is vacant: consumer released it with a release store we've observed via acquiring fetch.
            self.unsafe_slot(write).write(MaybeUninit::new(elem));
            // Release store publishes the item together with the index.
            self.set_write_index(write.wrapping_add(1));
        }
        Ok(())
    }
}

impl<R: RbRef> CachingCons<R> {
    /// Whether there is at least one occupied slot.
    ///
    /// Looks at the shared write index only when the cached one says that the buffer is empty.
    #[inline]
    fn has_occupied(&self) -> bool {
        if self.cached_len() != 0 {
            return true;
        }
        self.fetch();
        self.cached_len() != 0
    }
}

impl<R: RbRef> Consumer for CachingCons<R> {
    #[inline]
    unsafe fn set_read_index(&self, value: usize) {
        self.indices.read.set(value);
        self.rb.rb().set_read_index(value);
    }

    fn front(&mut self) -> Option<&Self::Item> {
        if !self.has_occupied() {
            return None;
        }
        // Cached write index came from an acquiring load, so the item behind it is fully written.
        Some(unsafe { (*self.unsafe_slot(self.indices.read.get())).assume_init_ref() })
    }

    fn pop(&mut self) -> bool {
        if !self.has_occupied() {
            return false;
        }
        unsafe { self.set_read_index(self.indices.read.get().wrapping_add(1)) };
        true
    }
}

impl<R: RbRef, const P: bool, const C: bool> Drop for Caching<R, P, C> {
    fn drop(&mut self) {
        unsafe {
            if P {
                self.rb.rb().hold_write(false);
            }
            if C {
                self.rb.rb().hold_read(false);
            }
        }
        trace!(producer = P, consumer = C, "ring buffer end released");
    }
}
