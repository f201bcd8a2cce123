//! Core logic behind the `msgpack-pack` and `msgpack-unpack` binaries.
//!
//! - `msgpack-pack`: encode one JSON document → wire bytes
//! - `msgpack-unpack`: decode every value in the input → one JSON document per line

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{
    encode_into, from_json, to_json, BufferError, DecoderConfig, IoSink, IoSource, MsgPackDecoder,
    MsgPackEncoder, MsgPackError,
};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    MsgPack(#[from] MsgPackError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// Encode a JSON document (stdin or file) to MessagePack (stdout or file).
#[derive(Parser, Debug)]
#[command(name = "msgpack-pack", version)]
pub struct PackArgs {
    /// Read JSON from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Write bytes to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Decode MessagePack values (stdin or file) to JSON on stdout.
#[derive(Parser, Debug)]
#[command(name = "msgpack-unpack", version)]
pub struct UnpackArgs {
    /// Read bytes from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Reject containers nested deeper than this
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Pretty-print each JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

// ── Logging ───────────────────────────────────────────────────────────────

/// Installs a stderr subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        tracing::debug!(%err, "subscriber already installed");
    }
}

// ── msgpack-pack ──────────────────────────────────────────────────────────

/// Encodes a JSON document to wire bytes.
pub fn pack(json: &str) -> Result<Vec<u8>, CliError> {
    let doc: serde_json::Value = serde_json::from_str(json)?;
    Ok(MsgPackEncoder::new().encode(&from_json(&doc))?)
}

pub fn run_pack(args: &PackArgs) -> Result<(), CliError> {
    let mut text = String::new();
    match &args.input {
        Some(path) => File::open(path)?.read_to_string(&mut text)?,
        None => io::stdin().lock().read_to_string(&mut text)?,
    };
    let doc: serde_json::Value = serde_json::from_str(text.trim())?;
    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = encode_into(IoSink::new(out), &from_json(&doc))?;
    sink.flush()?;
    tracing::info!("packed one value");
    Ok(())
}

// ── msgpack-unpack ────────────────────────────────────────────────────────

/// Decodes every value in `input`, back to back, into JSON text.
pub fn unpack<R: Read>(
    input: R,
    config: DecoderConfig,
    pretty: bool,
) -> Result<Vec<String>, CliError> {
    let mut decoder = MsgPackDecoder::with_config(IoSource::new(input), config);
    let mut docs = Vec::new();
    while !decoder.source.is_eof()? {
        let value = decoder.read_any()?;
        let json = to_json(&value)?;
        docs.push(if pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        });
    }
    tracing::info!(values = docs.len(), "unpacked");
    Ok(docs)
}

pub fn run_unpack(args: &UnpackArgs) -> Result<(), CliError> {
    let config = DecoderConfig {
        max_depth: args.max_depth,
    };
    let docs = match &args.input {
        Some(path) => unpack(BufReader::new(File::open(path)?), config, args.pretty)?,
        None => unpack(io::stdin().lock(), config, args.pretty)?,
    };
    let mut out = io::stdout().lock();
    for doc in docs {
        writeln!(out, "{doc}")?;
    }
    out.flush()?;
    Ok(())
}
