//! Codec for the early MessagePack wire format.
//!
//! This revision predates the str/bin split and extension types: byte
//! strings of every kind travel as *raw*, floats are always 64-bit, and
//! integers use fixnums or one of eight fixed-width forms.
//!
//! ```
//! use msgpack_pure::{decode, encode, Value};
//!
//! let value = Value::Map(vec![
//!     (Value::from(2), Value::from(3)),
//!     (Value::from(0), Value::from(1)),
//! ]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes, [0x82, 0x00, 0x01, 0x02, 0x03]);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod cli;
pub mod constants;
mod decoder;
mod encoder;
mod error;
pub mod json;
pub mod key_order;
mod util;
mod value;

pub use decoder::{DecoderConfig, MsgPackDecoder};
pub use encoder::MsgPackEncoder;
pub use error::MsgPackError;
pub use json::{from_json, to_json};
pub use util::{decode, decode_from, encode, encode_into, MsgPack};
pub use value::Value;

pub use msgpack_pure_buffers::{BufferError, IoSink, IoSource, Reader, Sink, Source, Writer};
