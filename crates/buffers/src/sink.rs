//! Append-only byte output.

use crate::{BufferError, Writer};

/// An append-only destination for encoded bytes.
///
/// Implementors provide [`Sink::write_bytes`]; the fixed-width helpers
/// write big-endian and are built on top of it.
pub trait Sink {
    /// Appends `bytes` in full, or fails.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError>;

    #[inline]
    fn write_u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.write_bytes(&[val])
    }

    #[inline]
    fn write_u16(&mut self, val: u16) -> Result<(), BufferError> {
        self.write_bytes(&val.to_be_bytes())
    }

    #[inline]
    fn write_u32(&mut self, val: u32) -> Result<(), BufferError> {
        self.write_bytes(&val.to_be_bytes())
    }

    #[inline]
    fn write_u64(&mut self, val: u64) -> Result<(), BufferError> {
        self.write_bytes(&val.to_be_bytes())
    }

    #[inline]
    fn write_f64(&mut self, val: f64) -> Result<(), BufferError> {
        self.write_bytes(&val.to_be_bytes())
    }

    /// A tag byte followed by a big-endian `u16` payload.
    #[inline]
    fn write_u8u16(&mut self, tag: u8, val: u16) -> Result<(), BufferError> {
        let [a, b] = val.to_be_bytes();
        self.write_bytes(&[tag, a, b])
    }

    /// A tag byte followed by a big-endian `u32` payload.
    #[inline]
    fn write_u8u32(&mut self, tag: u8, val: u32) -> Result<(), BufferError> {
        let [a, b, c, d] = val.to_be_bytes();
        self.write_bytes(&[tag, a, b, c, d])
    }

    /// A tag byte followed by a big-endian `f64` payload.
    #[inline]
    fn write_u8f64(&mut self, tag: u8, val: f64) -> Result<(), BufferError> {
        self.write_u8(tag)?;
        self.write_f64(val)
    }
}

impl Sink for Writer {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.buf(bytes);
        Ok(())
    }

    #[inline]
    fn write_u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.u8(val);
        Ok(())
    }

    #[inline]
    fn write_u8u16(&mut self, tag: u8, val: u16) -> Result<(), BufferError> {
        self.u8u16(tag, val);
        Ok(())
    }

    #[inline]
    fn write_u8u32(&mut self, tag: u8, val: u32) -> Result<(), BufferError> {
        self.u8u32(tag, val);
        Ok(())
    }

    #[inline]
    fn write_u8f64(&mut self, tag: u8, val: f64) -> Result<(), BufferError> {
        self.u8f64(tag, val);
        Ok(())
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        (**self).write_bytes(bytes)
    }
}
