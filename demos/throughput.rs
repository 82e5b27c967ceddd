//! Measures handoff throughput between two spinning threads.
//!
//! Neither `push` nor `pop` waits, so both threads retry with backoff on their own.

use cmdring::{traits::*, HeapRb};
use crossbeam_utils::Backoff;
use std::{env, thread, time::Instant};

fn init_logging() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cmdring=debug")),
        )
        .with_thread_names(true)
        .init();
}

fn main() {
    init_logging();

    let ops: usize = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(1 << 27);
    let rb = HeapRb::<usize>::new(1 << 10);
    let (mut prod, mut cons) = rb.split();

    let start = Instant::now();

    let pjh = thread::Builder::new()
        .name("producer".into())
        .spawn(move || {
            let backoff = Backoff::new();
            for i in 0..ops {
                while !prod.push(i) {
                    backoff.snooze();
                }
                backoff.reset();
            }
        })
        .unwrap();

    let cjh = thread::Builder::new()
        .name("consumer".into())
        .spawn(move || {
            let backoff = Backoff::new();
            for i in 0..ops {
                loop {
                    if let Some(&x) = cons.front() {
                        assert_eq!(x, i);
                        cons.pop();
                        break;
                    }
                    backoff.snooze();
                }
                backoff.reset();
            }
        })
        .unwrap();

    pjh.join().unwrap();
    cjh.join().unwrap();

    let duration = start.elapsed().as_secs_f64();
    println!("Ops per thread: {}", ops);
    println!("Time: {:.3} seconds", duration);
    println!("Throughput: {:.3} ops/sec", ops as f64 / duration);
}
