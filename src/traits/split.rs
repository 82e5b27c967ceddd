use crate::traits::{Consumer, Producer};

/// Hands out both ends of a ring buffer that is moved into shared ownership.
///
/// The ends are independent values, so each one can be sent to its own thread.
pub trait Split {
    type Prod: Producer;
    type Cons: Consumer;

    /// Consumes the ring buffer and returns its write and read ends.
    fn split(self) -> (Self::Prod, Self::Cons);
}

/// Hands out both ends of a ring buffer that stays in place.
///
/// Useful when the buffer lives in a `static` or on the stack and no allocation is wanted.
pub trait SplitRef {
    type RefProd<'a>: Producer + 'a
    where
        Self: 'a;
    type RefCons<'a>: Consumer + 'a
    where
        Self: 'a;

    /// Returns write and read ends borrowing the ring buffer.
    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>);
}
