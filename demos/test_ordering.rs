//! Checks that a command is never seen half-written.
//!
//! Every field of each command is derived from its sequence number, so a consumer that observes
//! the new write index before the slot contents will find mismatching fields.
//! Worth running on weakly ordered targets such as aarch64.

use cmdring::{
    command::{Command, MoveData},
    traits::*,
    HeapRb,
};
use std::thread;

const COUNT: u32 = 10_000_000;

fn command(seq: u32) -> Command {
    Command::MoveShape(MoveData {
        id: seq,
        x: seq as f32,
        y: -(seq as f32),
    })
}

fn main() {
    let rb = HeapRb::<Command>::new(16);
    let (mut prod, mut cons) = rb.split();

    let pjh = thread::spawn(move || {
        for seq in 0..COUNT {
            while !prod.push(command(seq)) {
                thread::yield_now();
            }
        }
    });

    let cjh = thread::spawn(move || {
        let mut seq = 0;
        while seq < COUNT {
            let Some(cmd) = cons.try_pop() else {
                thread::yield_now();
                continue;
            };
            assert_eq!(cmd, command(seq), "command #{} is torn or out of order", seq);
            seq += 1;
            if seq % (COUNT / 10) == 0 {
                println!("... {}%", seq / (COUNT / 10) * 10);
            }
        }
        seq
    });

    pjh.join().unwrap();
    assert_eq!(cjh.join().unwrap(), COUNT);

    println!("Success!");
}
