use super::SharedRb;
#[cfg(feature = "alloc")]
use crate::storage::Heap;
use crate::{capacity, storage::Array, trace::error};
#[cfg(feature = "alloc")]
use alloc::{collections::TryReserveError, vec::Vec};
use core::{mem::MaybeUninit, num::NonZeroUsize};

/// Checks ring buffer capacity, panicking on zero or non-power-of-two values.
pub(super) fn validate_capacity(len: usize) -> NonZeroUsize {
    match capacity::check(len) {
        Ok(capacity) => capacity,
        Err(e) => {
            error!(capacity = len, "invalid ring buffer capacity");
            panic!("{}", e);
        }
    }
}

impl<T: Copy, const N: usize> Default for SharedRb<Array<T, N>> {
    fn default() -> Self {
        unsafe { Self::from_raw_parts(Array::<T, N>::default(), 0, 0) }
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy> Default for SharedRb<Heap<T>> {
    /// Ring buffer of [`capacity::DEFAULT`] slots.
    fn default() -> Self {
        Self::new(capacity::DEFAULT)
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy> SharedRb<Heap<T>> {
    /// Creates a new instance of a ring buffer.
    ///
    /// *Panics if allocation failed or `capacity` is zero or not a power of two.*
    pub fn new(capacity: usize) -> Self {
        validate_capacity(capacity);
        unsafe { Self::from_raw_parts(Heap::new(capacity), 0, 0) }
    }
    /// Creates a new instance of a ring buffer returning an error if allocation failed.
    ///
    /// *Panics if `capacity` is zero or not a power of two.*
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        validate_capacity(capacity);
        let mut vec = Vec::<MaybeUninit<T>>::new();
        vec.try_reserve_exact(capacity)?;
        vec.resize_with(capacity, MaybeUninit::uninit);
        Ok(unsafe { Self::from_raw_parts(vec.into(), 0, 0) })
    }
}
