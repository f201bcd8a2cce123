//! `MsgPackEncoder`: writes [`Value`]s in their narrowest wire form.

use msgpack_pure_buffers::{Sink, Writer};

use crate::constants::*;
use crate::key_order::sorted_entries;
use crate::{MsgPackError, Value};

/// Encoder over any [`Sink`].
///
/// The default sink is an in-memory [`Writer`], for which
/// [`MsgPackEncoder::encode`] returns the bytes of one value.
pub struct MsgPackEncoder<S = Writer> {
    pub sink: S,
}

impl Default for MsgPackEncoder<Writer> {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder<Writer> {
    pub fn new() -> Self {
        Self {
            sink: Writer::new(),
        }
    }

    /// Encodes one value and returns its bytes.
    ///
    /// On failure nothing of the value is kept in the writer.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, MsgPackError> {
        self.sink.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.sink.flush()),
            Err(err) => {
                self.sink.reset();
                Err(err)
            }
        }
    }
}

impl<S: Sink> MsgPackEncoder<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), MsgPackError> {
        match value {
            Value::Nil => self.write_nil(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Integer(i) => self.write_integer(*i),
            Value::Float(f) => self.write_float(*f),
            Value::Raw(b) => self.write_raw(b),
            Value::Array(items) => self.write_arr(items),
            Value::Map(entries) => self.write_map(entries),
        }
    }

    #[inline]
    fn put(&mut self, bytes: &[u8]) -> Result<(), MsgPackError> {
        self.sink.write_bytes(bytes).map_err(MsgPackError::from_sink)
    }

    #[inline]
    fn put_u16(&mut self, tag: u8, val: u16) -> Result<(), MsgPackError> {
        self.sink.write_u8u16(tag, val).map_err(MsgPackError::from_sink)
    }

    #[inline]
    fn put_u32(&mut self, tag: u8, val: u32) -> Result<(), MsgPackError> {
        self.sink.write_u8u32(tag, val).map_err(MsgPackError::from_sink)
    }

    pub fn write_nil(&mut self) -> Result<(), MsgPackError> {
        self.put(&[NIL])
    }

    pub fn write_boolean(&mut self, b: bool) -> Result<(), MsgPackError> {
        self.put(&[if b { TRUE } else { FALSE }])
    }

    pub fn write_float(&mut self, float: f64) -> Result<(), MsgPackError> {
        self.sink
            .write_u8f64(FLOAT64, float)
            .map_err(MsgPackError::from_sink)
    }

    /// Writes an integer using the first matching range, narrowest first.
    ///
    /// The ranges overlap (100 fits both the fixnum and `uint8` forms); the
    /// order of the checks is what makes the choice minimal. Casting to the
    /// narrower signed type keeps the low bits, which is the two's-complement
    /// form of a negative value.
    pub fn write_integer(&mut self, num: i128) -> Result<(), MsgPackError> {
        if (-0x20..=0x7f).contains(&num) {
            // positive fixnum, negative fixnum
            self.put(&[num as i8 as u8])
        } else if (0..=0xff).contains(&num) {
            self.put(&[UINT8, num as u8])
        } else if (-0x80..=0x7f).contains(&num) {
            self.put(&[INT8, num as i8 as u8])
        } else if (0..=0xffff).contains(&num) {
            self.put_u16(UINT16, num as u16)
        } else if (-0x8000..=0x7fff).contains(&num) {
            self.put_u16(INT16, num as i16 as u16)
        } else if (0..=0xffff_ffff).contains(&num) {
            self.put_u32(UINT32, num as u32)
        } else if (-0x8000_0000..=0x7fff_ffff).contains(&num) {
            self.put_u32(INT32, num as i32 as u32)
        } else if (0..=u64::MAX as i128).contains(&num) {
            self.write_halves(UINT64, num as u64)
        } else if (i64::MIN as i128..=i64::MAX as i128).contains(&num) {
            self.write_halves(INT64, num as i64 as u64)
        } else {
            tracing::debug!(num = %num, "integer outside [-2^63, 2^64-1]");
            Err(MsgPackError::ValueOutOfRange("integer"))
        }
    }

    /// 64-bit payload as a big-endian high word followed by the low word.
    fn write_halves(&mut self, tag: u8, bits: u64) -> Result<(), MsgPackError> {
        let high = (bits >> 32) as u32;
        let low = (bits & 0xffff_ffff) as u32;
        self.put_u32(tag, high)?;
        self.sink.write_u32(low).map_err(MsgPackError::from_sink)
    }

    /// Three-tier length header shared by raws, arrays and maps.
    fn write_len_hdr(
        &mut self,
        length: usize,
        fix: (u8, usize),
        tag16: u8,
        tag32: u8,
        what: &'static str,
    ) -> Result<(), MsgPackError> {
        let (fix_base, fix_max) = fix;
        if length <= fix_max {
            self.put(&[fix_base | length as u8])
        } else if length <= 0xffff {
            self.put_u16(tag16, length as u16)
        } else {
            match u32::try_from(length) {
                Ok(length) => self.put_u32(tag32, length),
                Err(_) => {
                    tracing::debug!(length, what, "length exceeds 2^32-1");
                    Err(MsgPackError::ValueOutOfRange(what))
                }
            }
        }
    }

    pub fn write_raw_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        self.write_len_hdr(length, (FIXRAW, FIXRAW_MAX), RAW16, RAW32, "raw length")
    }

    pub fn write_raw(&mut self, buf: &[u8]) -> Result<(), MsgPackError> {
        self.write_raw_hdr(buf.len())?;
        self.put(buf)
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        tracing::trace!(length, "array header");
        self.write_len_hdr(
            length,
            (FIXARRAY, FIXCONTAINER_MAX),
            ARRAY16,
            ARRAY32,
            "array length",
        )
    }

    pub fn write_arr(&mut self, items: &[Value]) -> Result<(), MsgPackError> {
        self.write_arr_hdr(items.len())?;
        for item in items {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), MsgPackError> {
        tracing::trace!(length, "map header");
        self.write_len_hdr(
            length,
            (FIXMAP, FIXCONTAINER_MAX),
            MAP16,
            MAP32,
            "map length",
        )
    }

    /// Writes a map with its entries sorted ascending by key.
    pub fn write_map(&mut self, entries: &[(Value, Value)]) -> Result<(), MsgPackError> {
        let sorted = sorted_entries(entries)?;
        self.write_map_hdr(sorted.len())?;
        for (key, val) in sorted {
            self.write_any(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }
}
