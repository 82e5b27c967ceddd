use crate::SharedRb as Rb;

mod basic;
mod cached;
