//! Byte buffers, sinks and sources for msgpack-pure.
//!
//! The codec never touches a transport directly. It appends bytes to a
//! [`Sink`] and consumes bytes from a [`Source`]; this crate provides the
//! in-memory and `std::io` backed implementations of both.
//!
//! # Overview
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`IoSink`] / [`IoSource`] - Adapters over `std::io::Write` / `std::io::Read`
//!
//! # Example
//!
//! ```
//! use msgpack_pure_buffers::{Reader, Source, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.buf(b"hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.read_u8().unwrap(), 0x01);
//! assert_eq!(reader.read_u16().unwrap(), 0x0203);
//! assert_eq!(reader.read_bytes(5).unwrap(), b"hello");
//! ```

mod io;
mod reader;
mod sink;
mod source;
mod writer;

pub use io::{IoSink, IoSource};
pub use reader::Reader;
pub use sink::Sink;
pub use source::Source;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer")]
    EndOfBuffer,
    /// The underlying transport failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
