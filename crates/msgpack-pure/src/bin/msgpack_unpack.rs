//! `msgpack-unpack`: decode MessagePack (stdin) to JSON lines (stdout).
//!
//! Usage:
//!   msgpack-unpack [--input PATH] [--max-depth N] [--pretty] [-v]

use clap::Parser;
use msgpack_pure::cli::{init_logging, run_unpack, UnpackArgs};

fn main() {
    let args = UnpackArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = run_unpack(&args) {
        tracing::debug!(error = ?e, "unpack failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
