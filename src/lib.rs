//! Lock-free single-producer single-consumer ring buffer for fixed-size messages.
//!
//! The buffer has a power-of-two capacity that never changes. It is split once into a producer and a consumer,
//! each of which keeps its own cursor and a cached copy of the opposite cursor, so that in the common case
//! neither side touches the cache line owned by the other one.
//!
//! Items must be [`Copy`]: the buffer moves plain data and never runs destructors.
//!
//! # Example
//!
#![cfg_attr(
    feature = "std",
    doc = r##"
```
use cmdring::{traits::*, HeapRb};
use std::thread;

let rb = HeapRb::<u32>::new(4);
let (mut prod, mut cons) = rb.split();

let pjh = thread::spawn(move || {
    for i in 0..16 {
        while !prod.push(i) {
            thread::yield_now();
        }
    }
});

let mut received = Vec::new();
while received.len() < 16 {
    match cons.try_pop() {
        Some(x) => received.push(x),
        None => thread::yield_now(),
    }
}
pjh.join().unwrap();

assert!(received.into_iter().eq(0..16));
```
"##
)]
#![no_std]
#![allow(clippy::type_complexity)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod alias;
pub mod capacity;
pub mod command;
pub mod error;
pub mod rb;
pub mod storage;
mod trace;
pub mod traits;
mod utils;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use alias::*;
pub use error::CapacityError;
pub use rb::SharedRb;
pub use wrap::{CachingCons, CachingProd, Obs};
