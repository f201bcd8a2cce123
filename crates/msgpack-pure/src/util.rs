//! Convenience entry points.

use msgpack_pure_buffers::{Reader, Sink, Source};

use crate::{MsgPackDecoder, MsgPackEncoder, MsgPackError, Value};

/// Encoded payload alias.
pub type MsgPack = Vec<u8>;

/// Encodes one value into a fresh buffer.
pub fn encode(value: &Value) -> Result<MsgPack, MsgPackError> {
    MsgPackEncoder::new().encode(value)
}

/// Appends one value to `sink` and hands the sink back.
pub fn encode_into<S: Sink>(sink: S, value: &Value) -> Result<S, MsgPackError> {
    let mut encoder = MsgPackEncoder::with_sink(sink);
    encoder.write_any(value)?;
    Ok(encoder.into_inner())
}

/// Decodes the value at the start of `blob`. Trailing bytes are ignored.
pub fn decode(blob: &[u8]) -> Result<Value, MsgPackError> {
    decode_from(Reader::new(blob))
}

/// Reads one value from `source`.
pub fn decode_from<S: Source>(source: S) -> Result<Value, MsgPackError> {
    MsgPackDecoder::new(source).read_any()
}
