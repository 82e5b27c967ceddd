use crate::{rb::RbRef, traits::Observer};
use core::{mem::MaybeUninit, num::NonZeroUsize};

/// Observer of ring buffer.
///
/// Can only query the ring buffer state, so any number of observers may coexist with producer and consumer.
pub struct Obs<R: RbRef> {
    rb: R,
}

impl<R: RbRef> Obs<R> {
    pub fn new(rb: R) -> Self {
        Self { rb }
    }
}

impl<R: RbRef> Clone for Obs<R> {
    fn clone(&self) -> Self {
        Self { rb: self.rb.clone() }
    }
}

impl<R: RbRef> Observer for Obs<R> {
    type Item = <R::Rb as Observer>::Item;

    #[inline]
    fn capacity(&self) -> NonZeroUsize {
        self.rb.rb().capacity()
    }
    #[inline]
    fn read_index(&self) -> usize {
        self.rb.rb().read_index()
    }
    #[inline]
    fn write_index(&self) -> usize {
        self.rb.rb().write_index()
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
