use super::{consumer::Consumer, producer::Producer, Observer};

/// Ring buffer itself, as opposed to one of its ends.
///
/// Besides acting as both ends at once, it records which ends are currently handed out,
/// so that a second producer or consumer can be refused.
pub trait RingBuffer: Observer + Consumer + Producer {
    /// Marks the read end as taken (`true`) or free (`false`), returning the previous mark.
    ///
    /// # Safety
    ///
    /// Only the consumer may clear the mark, and only when it goes away.
    unsafe fn hold_read(&self, flag: bool) -> bool;
    /// Marks the write end as taken (`true`) or free (`false`), returning the previous mark.
    ///
    /// # Safety
    ///
    /// Only the producer may clear the mark, and only when it goes away.
    unsafe fn hold_write(&self, flag: bool) -> bool;
}
