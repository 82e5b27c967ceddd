use super::Rb;
use crate::{storage::Array, traits::*};

fn indices(this: impl Observer) -> (usize, usize) {
    (this.read_index(), this.write_index())
}

#[test]
fn capacity() {
    const CAP: usize = 16;
    let rb = Rb::<Array<i32, CAP>>::default();
    assert_eq!(rb.capacity().get(), CAP);
}
#[test]
fn split_capacity() {
    const CAP: usize = 16;
    let mut rb = Rb::<Array<i32, CAP>>::default();
    let (prod, cons) = rb.split_ref();

    assert_eq!(prod.capacity().get(), CAP);
    assert_eq!(cons.capacity().get(), CAP);
}

#[test]
fn try_push() {
    let mut rb = Rb::<Array<i32, 2>>::default();
    let (mut prod, _) = rb.split_ref();

    assert_eq!(indices(prod.observe()), (0, 0));

    assert_eq!(prod.try_push(123), Ok(()));
    assert_eq!(indices(prod.observe()), (0, 1));

    assert_eq!(prod.try_push(234), Ok(()));
    assert_eq!(indices(prod.observe()), (0, 2));

    assert_eq!(prod.try_push(345), Err(345));
    assert_eq!(indices(prod.observe()), (0, 2));
}

#[test]
fn pop_empty() {
    let mut rb = Rb::<Array<i32, 2>>::default();
    let (_, mut cons) = rb.split_ref();

    assert_eq!(indices(cons.observe()), (0, 0));

    assert_eq!(cons.front(), None);
    assert!(!cons.pop());
    assert_eq!(cons.try_pop(), None);
    assert_eq!(indices(cons.observe()), (0, 0));
}

#[test]
fn front_does_not_remove() {
    let mut rb = Rb::<Array<i32, 4>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    assert!(prod.push(5));
    assert!(prod.push(3));

    assert_eq!(cons.front(), Some(&5));
    assert_eq!(cons.front(), Some(&5));
    assert_eq!(cons.occupied_len(), 2);

    assert!(cons.pop());
    assert_eq!(cons.front(), Some(&3));

    assert!(cons.pop());
    assert!(cons.is_empty());
    assert!(!cons.pop());
}

#[test]
fn front_holds_slot_until_pop() {
    let mut rb = Rb::<Array<i32, 1>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    assert!(prod.push(1));
    let front = cons.front().unwrap();
    assert!(!prod.push(99));
    assert_eq!(*front, 1);

    assert!(cons.pop());
    assert!(prod.push(99));
    assert_eq!(cons.front(), Some(&99));
}

#[test]
fn push_pop_one() {
    const CAP: usize = 2;
    let mut rb = Rb::<Array<i32, CAP>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    let values = [12, 34, 56, 78, 90];
    assert_eq!(indices(cons.observe()), (0, 0));

    for (i, v) in values.iter().enumerate() {
        assert_eq!(prod.try_push(*v), Ok(()));
        assert_eq!(indices(cons.observe()), (i, i + 1));

        assert_eq!(cons.try_pop().unwrap(), *v);
        assert_eq!(indices(cons.observe()), (i + 1, i + 1));

        assert_eq!(cons.try_pop(), None);
        assert_eq!(indices(cons.observe()), (i + 1, i + 1));
    }
}

#[test]
fn push_pop_all() {
    const CAP: usize = 2;
    let mut rb = Rb::<Array<i32, CAP>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    let values = [(12, 34, 13), (56, 78, 57), (90, 10, 91)];
    assert_eq!(indices(cons.observe()), (0, 0));

    for (i, v) in values.iter().enumerate() {
        assert_eq!(prod.try_push(v.0), Ok(()));
        assert_eq!(indices(cons.observe()), (CAP * i, CAP * i + 1));

        assert_eq!(prod.try_push(v.1), Ok(()));
        assert_eq!(indices(cons.observe()), (CAP * i, CAP * i + 2));

        assert_eq!(prod.try_push(v.2).unwrap_err(), v.2);
        assert_eq!(indices(cons.observe()), (CAP * i, CAP * i + 2));

        assert_eq!(cons.try_pop().unwrap(), v.0);
        assert_eq!(indices(cons.observe()), (CAP * i + 1, CAP * i + 2));

        assert_eq!(cons.try_pop().unwrap(), v.1);
        assert_eq!(indices(cons.observe()), (CAP * i + 2, CAP * i + 2));

        assert_eq!(cons.try_pop(), None);
        assert_eq!(indices(cons.observe()), (CAP * i + 2, CAP * i + 2));
    }
}

#[test]
fn fifo() {
    const CAP: usize = 8;
    let mut rb = Rb::<Array<u32, CAP>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    for v in 0..CAP as u32 {
        assert!(prod.push(v * 3));
    }
    for v in 0..CAP as u32 {
        assert_eq!(cons.front(), Some(&(v * 3)));
        assert!(cons.pop());
    }
    assert_eq!(cons.front(), None);
}

#[test]
fn capacity_bound() {
    const CAP: usize = 4;
    let mut rb = Rb::<Array<i32, CAP>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    for i in 0..CAP as i32 {
        assert!(prod.push(i));
    }
    assert!(prod.is_full());
    assert!(!prod.push(100));

    assert!(cons.pop());
    assert!(prod.push(100));
    assert!(!prod.push(101));
}

#[test]
fn single_slot() {
    let mut rb = Rb::<Array<i32, 1>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    assert!(prod.is_empty() && cons.is_empty());
    assert!(!prod.is_full() && !cons.is_full());

    assert!(prod.push(1));
    assert!(!prod.is_empty() && !cons.is_empty());
    assert!(prod.is_full() && cons.is_full());
    assert!(!prod.push(2));

    assert_eq!(cons.try_pop(), Some(1));
    assert!(prod.push(3));
    assert_eq!(cons.try_pop(), Some(3));
}

/// Checks `(occupied, vacant)` as seen by both ends.
fn lens(prod: &impl Observer, cons: &impl Observer) -> [(usize, usize); 2] {
    [
        (prod.occupied_len(), prod.vacant_len()),
        (cons.occupied_len(), cons.vacant_len()),
    ]
}

#[test]
fn occupied_vacant() {
    let mut rb = Rb::<Array<i32, 2>>::default();
    let (mut prod, mut cons) = rb.split_ref();

    assert_eq!(lens(&prod, &cons), [(0, 2); 2]);

    assert!(prod.push(123));
    assert_eq!(lens(&prod, &cons), [(1, 1); 2]);
    assert!(prod.push(456));
    assert_eq!(lens(&prod, &cons), [(2, 0); 2]);

    assert_eq!(cons.try_pop(), Some(123));
    assert_eq!(lens(&prod, &cons), [(1, 1); 2]);
    assert_eq!(cons.try_pop(), Some(456));
    assert_eq!(lens(&prod, &cons), [(0, 2); 2]);

    assert!(prod.push(789));
    assert_eq!(lens(&prod, &cons), [(1, 1); 2]);
}

#[test]
fn whole_buffer() {
    let mut rb = Rb::<Array<i32, 4>>::default();

    assert!(rb.push(1));
    assert!(rb.push(2));
    assert_eq!(rb.occupied_len(), 2);
    assert_eq!(rb.front(), Some(&1));
    assert_eq!(rb.try_pop(), Some(1));
    assert_eq!(rb.try_pop(), Some(2));
    assert_eq!(rb.try_pop(), None);
}

#[test]
fn static_aliases() {
    use crate::{StaticCons, StaticProd, StaticRb};

    let mut rb = StaticRb::<i32, 4>::default();
    let (mut prod, mut cons): (StaticProd<'_, i32, 4>, StaticCons<'_, i32, 4>) = rb.split_ref();

    assert!(prod.push(1));
    assert_eq!(cons.try_pop(), Some(1));
}
