//! Binary buffer reader with cursor tracking.

use crate::{BufferError, Source};

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position. Multi-byte reads come from the
/// [`Source`] trait and never advance the cursor when the slice is too short.
///
/// # Example
///
/// ```
/// use msgpack_pure_buffers::{Reader, Source};
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.read_u8().unwrap(), 0x01);
/// assert_eq!(reader.read_u16().unwrap(), 0x0203);
/// assert_eq!(reader.size(), 1);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        if self.x < self.end {
            Some(self.uint8[self.x])
        } else {
            None
        }
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        if length > self.size() {
            return Err(BufferError::EndOfBuffer);
        }
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        if size > self.size() {
            return Err(BufferError::EndOfBuffer);
        }
        let x = self.x;
        let end = x + size;
        self.x = end;
        Ok(&self.uint8[x..end])
    }
}

impl Source for Reader<'_> {
    #[inline]
    fn read_into(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        let bin = self.buf(buf.len())?;
        buf.copy_from_slice(bin);
        Ok(())
    }

    #[inline]
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, BufferError> {
        Ok(self.buf(len)?.to_vec())
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, BufferError> {
        let val = self.peek().ok_or(BufferError::EndOfBuffer)?;
        self.x += 1;
        Ok(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u8().unwrap(), 0x02);
        assert_eq!(reader.read_u8().unwrap(), 0x03);
        assert!(matches!(reader.read_u8(), Err(BufferError::EndOfBuffer)));
    }

    #[test]
    fn test_u16() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert_eq!(reader.read_u16().unwrap(), 0x0304);
    }

    #[test]
    fn test_short_read_keeps_cursor() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.read_u8().unwrap();
        assert!(matches!(reader.read_u32(), Err(BufferError::EndOfBuffer)));
        assert_eq!(reader.x, 1);
        assert_eq!(reader.read_u16().unwrap(), 0x0203);
    }

    #[test]
    fn test_skip() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        reader.skip(2).unwrap();
        assert_eq!(reader.read_u8().unwrap(), 0x03);
        assert!(reader.skip(2).is_err());
    }

    #[test]
    fn test_signed_reads() {
        let data = [0xff, 0xff, 0x7f, 0x80, 0x00, 0x00, 0x00];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_i8().unwrap(), -1);
        assert_eq!(reader.read_i16().unwrap(), -129);
        assert_eq!(reader.read_i32().unwrap(), i32::MIN);
    }

    #[test]
    fn test_reset() {
        let a = [0x01];
        let b = [0x02, 0x03];
        let mut reader = Reader::new(&a);
        reader.read_u8().unwrap();
        reader.reset(&b);
        assert_eq!(reader.size(), 2);
        assert_eq!(reader.peek(), Some(0x02));
    }
}
