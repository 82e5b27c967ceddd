//! Command queue living in a static, without any allocation.
//!
//! `on_click` stands for an input handler that runs apart from the main loop.

#![no_std]

use cmdring::{
    command::{Command, Shape},
    traits::*,
    StaticRb,
};
use lock_free_static::OnceMut;

const CAP: usize = 4;

static RB: OnceMut<StaticRb<Command, CAP>> = OnceMut::new();

fn on_click(prod: &mut impl Producer<Item = Command>, x: f32, y: f32) -> bool {
    prod.push(Command::create(Shape::Rectangle, x, y))
}

fn drain(cons: &mut impl Consumer<Item = Command>) -> usize {
    let mut applied = 0;
    while let Some(cmd) = cons.front() {
        assert!(matches!(cmd, Command::CreateShape(_)));
        cons.pop();
        applied += 1;
    }
    applied
}

fn main() {
    RB.set(StaticRb::default()).ok().expect("command queue already initialized");
    let (mut prod, mut cons) = RB.get_mut().expect("command queue already split").split_ref();

    for i in 0..CAP {
        assert!(on_click(&mut prod, i as f32, 0.0));
    }
    assert!(!on_click(&mut prod, 0.0, 0.0));

    assert_eq!(drain(&mut cons), CAP);
    assert_eq!(drain(&mut cons), 0);
    assert!(on_click(&mut prod, 1.0, 1.0));
    assert_eq!(drain(&mut cons), 1);
}
