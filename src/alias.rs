#[cfg(feature = "alloc")]
use super::storage::Heap;
use super::{
    rb::SharedRb,
    storage::Array,
    wrap::{CachingCons, CachingProd},
};
#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
use alloc::sync::Arc;
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
use portable_atomic_util::Arc;

/// Ring buffer keeping `N` slots inline, e.g. on the stack or in a `static`.
///
/// *`N` must be a non-zero power of two, otherwise construction fails to compile.*
pub type StaticRb<T, const N: usize> = SharedRb<Array<T, N>>;

/// Write end of [`StaticRb`] borrowing the buffer.
pub type StaticProd<'a, T, const N: usize> = CachingProd<&'a StaticRb<T, N>>;

/// Read end of [`StaticRb`] borrowing the buffer.
pub type StaticCons<'a, T, const N: usize> = CachingCons<&'a StaticRb<T, N>>;

/// Ring buffer with slots allocated on the heap once, at construction.
#[cfg(feature = "alloc")]
pub type HeapRb<T> = SharedRb<Heap<T>>;

/// Write end of [`HeapRb`] sharing the buffer with its read end.
#[cfg(feature = "alloc")]
pub type HeapProd<T> = CachingProd<Arc<HeapRb<T>>>;

/// Read end of [`HeapRb`] sharing the buffer with its write end.
#[cfg(feature = "alloc")]
pub type HeapCons<T> = CachingCons<Arc<HeapRb<T>>>;
