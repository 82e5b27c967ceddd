use crate::traits::RingBuffer;
#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
use alloc::sync::Arc;
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
use portable_atomic_util::Arc;

/// Reference to a ring buffer that producer and consumer hold.
///
/// # Safety
///
/// Every clone must refer to the same ring buffer.
pub unsafe trait RbRef: Clone {
    /// Underlying ring buffer.
    type Rb: RingBuffer;

    fn rb(&self) -> &Self::Rb;
}

unsafe impl<'a, B: RingBuffer> RbRef for &'a B {
    type Rb = B;

    #[inline]
    fn rb(&self) -> &B {
        self
    }
}
#[cfg(feature = "alloc")]
unsafe impl<B: RingBuffer> RbRef for Arc<B> {
    type Rb = B;

    #[inline]
    fn rb(&self) -> &B {
        self
    }
}
