//! Capacity validation and cursor arithmetic.
//!
//! Cursors count items ever written or read and wrap around at `usize::MAX`.
//! Capacity is a power of two, so slot position is the cursor masked by `capacity - 1`.

use crate::error::CapacityError;
use core::num::NonZeroUsize;

/// Capacity of a heap ring buffer created with `Default`.
pub const DEFAULT: usize = 1 << 10;

/// Checks that `capacity` can be used as a ring buffer capacity.
pub const fn check(capacity: usize) -> Result<NonZeroUsize, CapacityError> {
    match NonZeroUsize::new(capacity) {
        None => Err(CapacityError::Zero),
        Some(n) if n.is_power_of_two() => Ok(n),
        Some(_) => Err(CapacityError::NotPowerOfTwo(capacity)),
    }
}

/// Slot position of `cursor` in storage of `capacity` items.
#[inline]
pub fn slot(capacity: NonZeroUsize, cursor: usize) -> usize {
    cursor & (capacity.get() - 1)
}

/// Number of items between `read` and `write` cursors.
///
/// Cursors may be loaded at different moments, so the result is clamped to `capacity`.
#[inline]
pub fn occupied(capacity: NonZeroUsize, read: usize, write: usize) -> usize {
    usize::min(write.wrapping_sub(read), capacity.get())
}
