use super::init::validate_capacity;
#[cfg(feature = "alloc")]
use crate::traits::Split;
use crate::{
    capacity,
    storage::Storage,
    trace::{debug, trace},
    traits::{Consumer, Observer, Producer, RingBuffer, SplitRef},
    wrap::{CachingCons, CachingProd},
};
#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
use alloc::sync::Arc;
#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use core::{mem::MaybeUninit, num::NonZeroUsize};
use crossbeam_utils::CachePadded;
#[cfg(feature = "portable-atomic")]
use portable_atomic::{AtomicBool, AtomicUsize, Ordering};
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
use portable_atomic_util::Arc;

/// Ring buffer that can be shared between threads.
///
/// Read and write indices are kept on separate cache lines,
/// so producer and consumer don't invalidate each other's line on every operation.
///
/// Note that there is no explicit requirement of `T: Send`. Instead ring buffer will work just fine even with `T: !Send`
/// until you try to send its producer or consumer to another thread.
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use std::thread;
use cmdring::{SharedRb, storage::Heap, traits::*};

let rb = SharedRb::<Heap<i32>>::new(256);
let (mut prod, mut cons) = rb.split();
thread::spawn(move || {
    assert!(prod.push(123));
})
.join();
thread::spawn(move || {
    assert_eq!(cons.front(), Some(&123));
    assert!(cons.pop());
})
.join();
```
"##
)]
pub struct SharedRb<S: Storage> {
    storage: S,
    capacity: NonZeroUsize,
    read_index: CachePadded<AtomicUsize>,
    write_index: CachePadded<AtomicUsize>,
    read_held: AtomicBool,
    write_held: AtomicBool,
}

impl<S: Storage> SharedRb<S> {
    /// Constructs ring buffer from storage and indices.
    ///
    /// *Panics if storage length is zero or not a power of two.*
    ///
    /// # Safety
    ///
    /// The items in storage inside `read..write` range must be initialized.
    /// `write - read` (wrapping) must not exceed storage length.
    pub unsafe fn from_raw_parts(storage: S, read: usize, write: usize) -> Self {
        let capacity = validate_capacity(storage.len());
        assert!(
            write.wrapping_sub(read) <= capacity.get(),
            "write index {} is too far ahead of read index {}",
            write,
            read
        );
        debug!(capacity = capacity.get(), read, write, "ring buffer created");
        Self {
            storage,
            capacity,
            read_index: CachePadded::new(AtomicUsize::new(read)),
            write_index: CachePadded::new(AtomicUsize::new(write)),
            read_held: AtomicBool::new(false),
            write_held: AtomicBool::new(false),
        }
    }
}

impl<S: Storage> Observer for SharedRb<S>
where
    S::Item: Copy,
{
    type Item = S::Item;

    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    #[inline]
    fn read_index(&self) -> usize {
        self.read_index.load(Ordering::Acquire)
    }
    #[inline]
    fn write_index(&self) -> usize {
        self.write_index.load(Ordering::Acquire)
    }

    #[inline]
    unsafe fn unsafe_slot(&self, index: usize) -> *mut MaybeUninit<S::Item> {
        self.storage.as_mut_ptr().add(capacity::slot(self.capacity, index))
    }

    #[inline]
    fn read_is_held(&self) -> bool {
        self.read_held.load(Ordering::Relaxed)
    }
    #[inline]
    fn write_is_held(&self) -> bool {
        self.write_held.load(Ordering::Relaxed)
    }
}

impl<S: Storage> Producer for SharedRb<S>
where
    S::Item: Copy,
{
    #[inline]
    unsafe fn set_write_index(&self, value: usize) {
        self.write_index.store(value, Ordering::Release);
    }
}

impl<S: Storage> Consumer for SharedRb<S>
where
    S::Item: Copy,
{
    #[inline]
    unsafe fn set_read_index(&self, value: usize) {
        self.read_index.store(value, Ordering::Release);
    }
}

impl<S: Storage> RingBuffer for SharedRb<S>
where
    S::Item: Copy,
{
    #[inline]
    unsafe fn hold_read(&self, flag: bool) -> bool {
        self.read_held.swap(flag, Ordering::Relaxed)
    }
    #[inline]
    unsafe fn hold_write(&self, flag: bool) -> bool {
        self.write_held.swap(flag, Ordering::Relaxed)
    }
}

#[cfg(feature = "alloc")]
impl<S: Storage> Split for SharedRb<S>
where
    S::Item: Copy,
{
    type Prod = CachingProd<Arc<Self>>;
    type Cons = CachingCons<Arc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        trace!(capacity = self.capacity.get(), "splitting ring buffer");
        let rc = Arc::new(self);
        (CachingProd::new(rc.clone()), CachingCons::new(rc))
    }
}
impl<S: Storage> SplitRef for SharedRb<S>
where
    S::Item: Copy,
{
    type RefProd<'a> = CachingProd<&'a Self> where Self: 'a;
    type RefCons<'a> = CachingCons<&'a Self> where Self: 'a;

    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>) {
        trace!(capacity = self.capacity.get(), "splitting ring buffer by reference");
        let this: &Self = self;
        (CachingProd::new(this), CachingCons::new(this))
    }
}
