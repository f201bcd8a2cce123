//! `msgpack-pack`: encode JSON (stdin) to MessagePack (stdout).
//!
//! Usage:
//!   msgpack-pack [--input PATH] [--output PATH] [-v]

use clap::Parser;
use msgpack_pure::cli::{init_logging, run_pack, PackArgs};

fn main() {
    let args = PackArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = run_pack(&args) {
        tracing::debug!(error = ?e, "pack failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
