//! Tripwire demo
//!
//! Each subcommand trips one kind of check so its report can be seen in a
//! real terminal. Set `RUST_LOG=tripwire=trace` to also see the library's
//! own tracing output.

use std::collections::BTreeSet;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Fixed-capacity queue used as the subject of every demo.
struct Ring {
    slots: Vec<u8>,
    head: usize,
    tail: usize,
}

impl Ring {
    fn new(capacity: usize) -> Self {
        Ring {
            slots: vec![0; capacity],
            head: 0,
            tail: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        let at = self.tail % self.slots.len();
        self.slots[at] = byte;
        self.tail += 1;
    }

    fn len(&self) -> usize {
        self.tail - self.head
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let mut ring = Ring::new(4);
    for byte in b"ab\n" {
        ring.push(*byte);
    }
    tracing::info!(command = %args[1], len = ring.len(), "running demo");

    match args[1].as_str() {
        "debug" => {
            let peers: BTreeSet<&str> = ["alpha", "beta"].into_iter().collect();
            tripwire::debug_print!(ring.head, ring.tail, ring.slots, peers);
            println!("debug_print! returned; execution continues");
        }
        "assert" => {
            tripwire::assert_always!(
                ring.len() > ring.slots.len(),
                "ring is not full",
                ring.len(),
                ring.slots
            );
        }
        "eq" => {
            tripwire::assert_always_eq!(ring.len(), 4, "unexpected length", ring.slots);
        }
        "ne" => {
            tripwire::assert_always_ne!(ring.head, 0, "nothing was consumed", ring.tail);
        }
        "dbg" => {
            let last = ring.slots[(ring.tail - 1) % ring.slots.len()];
            tripwire::assert_dbg!(last != b'\n', "trailing newline", last);
        }
        "fail" => {
            let mode = args.get(2).map_or("unset", String::as_str);
            let capacity = match mode {
                "small" => 4,
                "large" => 64,
                _ => tripwire::fail_always!("unknown ring size", mode, args),
            };
            println!("capacity {capacity}");
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: tripwire-demo <command>");
    println!();
    println!("Commands:");
    println!("  debug          Print values with debug_print! and keep going");
    println!("  assert         Trip assert_always!");
    println!("  eq             Trip assert_always_eq!");
    println!("  ne             Trip assert_always_ne!");
    println!("  dbg            Trip assert_dbg! (silent abort with --features minimal)");
    println!("  fail [size]    Trip fail_always! unless size is `small` or `large`");
    println!();
    println!("Environment:");
    println!("  RUST_LOG       Enable tracing output, e.g. RUST_LOG=tripwire=debug");
}
