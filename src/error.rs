use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Ring buffer capacity cannot be used for index masking.
pub enum CapacityError {
    /// Capacity is zero.
    Zero,
    /// Capacity is not a power of two.
    NotPowerOfTwo(usize),
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "ring buffer capacity must not be zero"),
            Self::NotPowerOfTwo(n) => write!(f, "ring buffer capacity must be a power of two, got {}", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}
