//! Memory the ring buffer keeps its slots in.
//!
//! Storage decides where the slots live: inline ([`Array`]), on the heap ([`Heap`]),
//! or in memory provided by the caller ([`Ref`]), e.g. a static region or a custom allocator.

use crate::{capacity, utils::uninit_array};
#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};
use core::{cell::UnsafeCell, marker::PhantomData, mem::MaybeUninit, num::NonZeroUsize};

/// Abstract storage for the ring buffer.
///
/// Storage items must be stored as a contiguous array.
///
/// # Safety
///
/// [`Self::len`] must not change during the storage lifetime.
///
/// [`Self::as_mut_ptr`] must point to [`Self::len`] valid slots for the whole storage lifetime.
/// It must be fine to access different slots from different threads at the same time.
pub unsafe trait Storage {
    /// Stored item.
    type Item: Sized;

    /// Length of the storage.
    fn len(&self) -> usize;
    /// Whether the storage has no slots at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return pointer to the beginning of the storage items.
    fn as_mut_ptr(&self) -> *mut MaybeUninit<Self::Item>;
}

/// Storage that owns its data inline.
pub struct Owning<T: ?Sized> {
    data: UnsafeCell<T>,
}
unsafe impl<T: ?Sized> Sync for Owning<T> where T: Send {}
impl<T> From<T> for Owning<T> {
    fn from(value: T) -> Self {
        Self {
            data: UnsafeCell::new(value),
        }
    }
}

/// Inline array of `N` slots.
pub type Array<T, const N: usize> = Owning<[MaybeUninit<T>; N]>;

impl<T, const N: usize> Array<T, N> {
    /// Capacity checked at compile time.
    pub(crate) const CAPACITY: NonZeroUsize = match capacity::check(N) {
        Ok(n) => n,
        Err(_) => panic!("array capacity must be a non-zero power of two"),
    };
}

unsafe impl<T, const N: usize> Storage for Array<T, N> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }
    #[inline]
    fn as_mut_ptr(&self) -> *mut MaybeUninit<T> {
        self.data.get() as *mut MaybeUninit<T>
    }
}

impl<T, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        let _ = Self::CAPACITY;
        Self::from(uninit_array())
    }
}

/// Heap storage.
///
/// Keeps a raw pointer instead of `Box` because slots are written through shared references.
#[cfg(feature = "alloc")]
pub struct Heap<T> {
    ptr: *mut MaybeUninit<T>,
    len: usize,
}
#[cfg(feature = "alloc")]
unsafe impl<T> Send for Heap<T> where T: Send {}
#[cfg(feature = "alloc")]
unsafe impl<T> Sync for Heap<T> where T: Send {}

#[cfg(feature = "alloc")]
impl<T> Heap<T> {
    /// Allocates `capacity` uninitialized slots.
    pub fn new(capacity: usize) -> Self {
        (0..capacity).map(|_| MaybeUninit::uninit()).collect::<Box<[_]>>().into()
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T> Storage for Heap<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
    #[inline]
    fn as_mut_ptr(&self) -> *mut MaybeUninit<T> {
        self.ptr
    }
}

#[cfg(feature = "alloc")]
impl<T> From<Box<[MaybeUninit<T>]>> for Heap<T> {
    fn from(value: Box<[MaybeUninit<T>]>) -> Self {
        Self {
            len: value.len(),
            ptr: Box::into_raw(value) as *mut MaybeUninit<T>,
        }
    }
}
#[cfg(feature = "alloc")]
impl<T> From<Vec<MaybeUninit<T>>> for Heap<T> {
    fn from(value: Vec<MaybeUninit<T>>) -> Self {
        value.into_boxed_slice().into()
    }
}

#[cfg(feature = "alloc")]
impl<T> Drop for Heap<T> {
    fn drop(&mut self) {
        drop(unsafe { Box::from_raw(core::ptr::slice_from_raw_parts_mut(self.ptr, self.len)) });
    }
}

/// Storage in memory borrowed from the caller.
pub struct Ref<'a, T> {
    _ghost: PhantomData<&'a mut [T]>,
    ptr: *mut MaybeUninit<T>,
    len: usize,
}
unsafe impl<'a, T> Send for Ref<'a, T> where T: Send {}
unsafe impl<'a, T> Sync for Ref<'a, T> where T: Send {}

unsafe impl<'a, T> Storage for Ref<'a, T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
    #[inline]
    fn as_mut_ptr(&self) -> *mut MaybeUninit<T> {
        self.ptr
    }
}

impl<'a, T> From<&'a mut [MaybeUninit<T>]> for Ref<'a, T> {
    fn from(value: &'a mut [MaybeUninit<T>]) -> Self {
        Self {
            _ghost: PhantomData,
            len: value.len(),
            ptr: value.as_mut_ptr(),
        }
    }
}
