//! `MsgPackDecoder`: reads one [`Value`] per call from a [`Source`].

use msgpack_pure_buffers::{Reader, Source};

use crate::constants::*;
use crate::{MsgPackError, Value};

/// Containers never reserve room for more than this many items up front;
/// the declared count comes from untrusted input.
const PREALLOC_LIMIT: usize = 4096;

/// Decoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest container nesting accepted. `None` decodes any depth.
    pub max_depth: Option<usize>,
}

impl DecoderConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

/// Decoder over any [`Source`].
pub struct MsgPackDecoder<S> {
    pub source: S,
    config: DecoderConfig,
    depth: usize,
}

impl<'a> MsgPackDecoder<Reader<'a>> {
    /// Decoder reading from the start of `bytes`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(Reader::new(bytes))
    }
}

impl<S: Source> MsgPackDecoder<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, DecoderConfig::default())
    }

    pub fn with_config(source: S, config: DecoderConfig) -> Self {
        Self {
            source,
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> DecoderConfig {
        self.config
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads exactly one complete value.
    ///
    /// On error the source position is unspecified and no partial value is
    /// returned.
    pub fn read_any(&mut self) -> Result<Value, MsgPackError> {
        let result = self.read_value();
        if result.is_err() {
            self.depth = 0;
        }
        result
    }

    fn read_value(&mut self) -> Result<Value, MsgPackError> {
        let byte = self.u8()?;
        match byte {
            // positive fixnum
            0x00..=0x7f => Ok(Value::Integer(byte as i128)),
            // negative fixnum
            0xe0..=0xff => Ok(Value::Integer(byte as i8 as i128)),
            0x80..=0x8f => self.read_map(byte as usize & FIXCONTAINER_MAX),
            0x90..=0x9f => self.read_arr(byte as usize & FIXCONTAINER_MAX),
            0xa0..=0xbf => self.read_raw(byte as usize & FIXRAW_MAX),
            NIL => Ok(Value::Nil),
            FALSE => Ok(Value::Bool(false)),
            TRUE => Ok(Value::Bool(true)),
            FLOAT64 => {
                let f = self.source.read_f64().map_err(MsgPackError::from_source)?;
                Ok(Value::Float(f))
            }
            UINT8 => Ok(Value::Integer(self.u8()? as i128)),
            UINT16 => Ok(Value::Integer(self.u16()? as i128)),
            UINT32 => Ok(Value::Integer(self.u32()? as i128)),
            UINT64 => Ok(Value::Integer(self.halves()? as i128)),
            INT8 => Ok(Value::Integer(self.u8()? as i8 as i128)),
            INT16 => Ok(Value::Integer(self.u16()? as i16 as i128)),
            INT32 => Ok(Value::Integer(self.u32()? as i32 as i128)),
            INT64 => Ok(Value::Integer(self.halves()? as i64 as i128)),
            RAW16 => {
                let length = self.u16()? as usize;
                self.read_raw(length)
            }
            RAW32 => {
                let length = self.u32()? as usize;
                self.read_raw(length)
            }
            ARRAY16 => {
                let count = self.u16()? as usize;
                self.read_arr(count)
            }
            ARRAY32 => {
                let count = self.u32()? as usize;
                self.read_arr(count)
            }
            MAP16 => {
                let count = self.u16()? as usize;
                self.read_map(count)
            }
            MAP32 => {
                let count = self.u32()? as usize;
                self.read_map(count)
            }
            _ => {
                tracing::debug!(tag = byte, "unknown tag");
                Err(MsgPackError::UnknownTag(byte))
            }
        }
    }

    #[inline]
    fn u8(&mut self) -> Result<u8, MsgPackError> {
        self.source.read_u8().map_err(MsgPackError::from_source)
    }

    #[inline]
    fn u16(&mut self) -> Result<u16, MsgPackError> {
        self.source.read_u16().map_err(MsgPackError::from_source)
    }

    #[inline]
    fn u32(&mut self) -> Result<u32, MsgPackError> {
        self.source.read_u32().map_err(MsgPackError::from_source)
    }

    /// Two big-endian 32-bit words combined as `high << 32 | low`.
    fn halves(&mut self) -> Result<u64, MsgPackError> {
        let high = self.u32()? as u64;
        let low = self.u32()? as u64;
        Ok((high << 32) | low)
    }

    fn read_raw(&mut self, length: usize) -> Result<Value, MsgPackError> {
        let bytes = self
            .source
            .read_bytes(length)
            .map_err(MsgPackError::from_source)?;
        Ok(Value::Raw(bytes))
    }

    fn enter(&mut self) -> Result<(), MsgPackError> {
        if let Some(max) = self.config.max_depth {
            if self.depth >= max {
                tracing::debug!(max, "container nesting limit reached");
                return Err(MsgPackError::DepthLimitExceeded(max));
            }
        }
        self.depth += 1;
        Ok(())
    }

    fn read_arr(&mut self, count: usize) -> Result<Value, MsgPackError> {
        tracing::trace!(count, "array header");
        self.enter()?;
        let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            items.push(self.read_value()?);
        }
        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn read_map(&mut self, count: usize) -> Result<Value, MsgPackError> {
        tracing::trace!(count, "map header");
        self.enter()?;
        let mut entries = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            let key = self.read_value()?;
            let val = self.read_value()?;
            entries.push((key, val));
        }
        self.depth -= 1;
        Ok(Value::Map(entries))
    }
}
