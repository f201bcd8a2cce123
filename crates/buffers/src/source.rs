//! Sequential byte input.

use crate::BufferError;

/// A sequential origin of encoded bytes.
///
/// Every read either yields exactly the requested number of bytes or fails;
/// running dry is reported as [`BufferError::EndOfBuffer`].
pub trait Source {
    /// Fills `buf` completely from the source.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<(), BufferError>;

    /// Reads exactly `len` bytes into a new vector.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, BufferError>;

    #[inline]
    fn read_u8(&mut self) -> Result<u8, BufferError> {
        let mut b = [0u8; 1];
        self.read_into(&mut b)?;
        Ok(b[0])
    }

    #[inline]
    fn read_i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.read_u8()? as i8)
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, BufferError> {
        let mut b = [0u8; 2];
        self.read_into(&mut b)?;
        Ok(u16::from_be_bytes(b))
    }

    #[inline]
    fn read_i16(&mut self) -> Result<i16, BufferError> {
        Ok(self.read_u16()? as i16)
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, BufferError> {
        let mut b = [0u8; 4];
        self.read_into(&mut b)?;
        Ok(u32::from_be_bytes(b))
    }

    #[inline]
    fn read_i32(&mut self) -> Result<i32, BufferError> {
        Ok(self.read_u32()? as i32)
    }

    #[inline]
    fn read_u64(&mut self) -> Result<u64, BufferError> {
        let mut b = [0u8; 8];
        self.read_into(&mut b)?;
        Ok(u64::from_be_bytes(b))
    }

    #[inline]
    fn read_i64(&mut self) -> Result<i64, BufferError> {
        Ok(self.read_u64()? as i64)
    }

    #[inline]
    fn read_f64(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_bits(self.read_u64()?))
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    #[inline]
    fn read_into(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        (**self).read_into(buf)
    }

    #[inline]
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, BufferError> {
        (**self).read_bytes(len)
    }
}
