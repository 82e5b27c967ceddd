use super::Rb;
use crate::{storage::Array, traits::*, CachingCons, CachingProd};
use core::{cell::Cell, mem::MaybeUninit, num::NonZeroUsize};

/// Ring buffer that counts loads of its shared indices.
#[derive(Default)]
struct Counting {
    rb: Rb<Array<i32, 4>>,
    read_loads: Cell<usize>,
    write_loads: Cell<usize>,
}

impl Counting {
    fn loads(&self) -> (usize, usize) {
        (self.read_loads.get(), self.write_loads.get())
    }
    fn reset(&self) {
        self.read_loads.set(0);
        self.write_loads.set(0);
    }
}

impl Observer for Counting {
    type Item = i32;

    fn capacity(&self) -> NonZeroUsize {
        self.rb.capacity()
    }
    fn read_index(&self) -> usize {
        self.read_loads.set(self.read_loads.get() + 1);
        self.rb.read_index()
    }
    fn write_index(&self) -> usize {
        self.write_loads.set(self.write_loads.get() + 1);
        self.rb.write_index()
    }
    unsafe fn unsafe_slot(&self, index: usize) -> *mut MaybeUninit<i32> {
        self.rb.unsafe_slot(index)
    }
    fn read_is_held(&self) -> bool {
        self.rb.read_is_held()
    }
    fn write_is_held(&self) -> bool {
        self.rb.write_is_held()
    }
}
impl Producer for Counting {
    unsafe fn set_write_index(&self, value: usize) {
        self.rb.set_write_index(value)
    }
}
impl Consumer for Counting {
    unsafe fn set_read_index(&self, value: usize) {
        self.rb.set_read_index(value)
    }
}
impl RingBuffer for Counting {
    unsafe fn hold_read(&self, flag: bool) -> bool {
        self.rb.hold_read(flag)
    }
    unsafe fn hold_write(&self, flag: bool) -> bool {
        self.rb.hold_write(flag)
    }
}

#[test]
fn producer_fetches_only_when_full() {
    let rb = Counting::default();
    let mut prod = CachingProd::new(&rb);
    let mut cons = CachingCons::new(&rb);
    rb.reset();

    for i in 0..4 {
        assert!(prod.push(i));
    }
    assert_eq!(rb.loads().0, 0);

    assert_eq!(prod.try_push(4), Err(4));
    assert_eq!(rb.loads().0, 1);

    assert!(cons.pop());
    assert_eq!(prod.try_push(4), Ok(()));
    assert_eq!(rb.loads().0, 2);
}

#[test]
fn consumer_fetches_only_when_empty() {
    let rb = Counting::default();
    let mut prod = CachingProd::new(&rb);
    let mut cons = CachingCons::new(&rb);

    for i in 0..4 {
        assert!(prod.push(i));
    }
    rb.reset();

    assert_eq!(cons.front(), Some(&0));
    assert_eq!(rb.loads().1, 1);
    assert_eq!(cons.front(), Some(&0));
    assert_eq!(rb.loads().1, 1);

    for i in 0..4 {
        assert_eq!(cons.front(), Some(&i));
        assert!(cons.pop());
    }
    assert_eq!(rb.loads().1, 1);

    assert!(!cons.pop());
    assert_eq!(rb.loads().1, 2);
}

#[test]
fn stale_cache_is_refreshed() {
    let mut rb = Rb::<Array<i32, 2>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    assert_eq!(cons.front(), None);
    assert!(prod.push(1));
    assert_eq!(cons.front(), Some(&1));

    assert!(prod.push(2));
    assert!(!prod.push(3));
    assert!(cons.pop());
    assert!(prod.push(3));

    assert_eq!(cons.try_pop(), Some(2));
    assert_eq!(cons.try_pop(), Some(3));
    assert_eq!(cons.try_pop(), None);
}

#[test]
fn observer_sees_fresh_state() {
    let mut rb = Rb::<Array<i32, 4>>::default();
    let (mut prod, mut cons) = rb.split_ref();
    let obs = cons.observe();

    assert!(prod.push(1));
    assert!(prod.push(2));
    assert_eq!(obs.occupied_len(), 2);
    assert_eq!(cons.occupied_len(), 2);

    assert!(cons.pop());
    assert_eq!(obs.occupied_len(), 1);
    assert_eq!(prod.occupied_len(), 1);
    assert_eq!(prod.vacant_len(), 3);
}
