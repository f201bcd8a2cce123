//! Codec error type.

use msgpack_pure_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsgPackError {
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
    #[error("{0} out of range")]
    ValueOutOfRange(&'static str),
    #[error("map keys cannot be ordered")]
    UnorderableKeys,
    #[error("map key appears more than once")]
    DuplicateMapKey,
    #[error("unknown tag 0x{0:02x}")]
    UnknownTag(u8),
    #[error("truncated input")]
    TruncatedInput,
    #[error("sink write failed: {0}")]
    SinkWriteFailure(#[source] std::io::Error),
    #[error("source read failed: {0}")]
    SourceReadFailure(#[source] std::io::Error),
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

impl MsgPackError {
    /// Maps a failed sink write.
    pub(crate) fn from_sink(err: BufferError) -> Self {
        match err {
            BufferError::Io(e) => MsgPackError::SinkWriteFailure(e),
            BufferError::EndOfBuffer => MsgPackError::SinkWriteFailure(
                std::io::Error::new(std::io::ErrorKind::WriteZero, "sink is full"),
            ),
        }
    }

    /// Maps a failed source read; running dry means the value was cut short.
    pub(crate) fn from_source(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => {
                tracing::debug!("source exhausted mid-value");
                MsgPackError::TruncatedInput
            }
            BufferError::Io(e) => MsgPackError::SourceReadFailure(e),
        }
    }
}
