//! Adapters from `std::io` streams to [`Sink`] and [`Source`].

use std::io::{ErrorKind, Read, Write};

use crate::{BufferError, Sink, Source};

/// Bytes are pulled from untrusted length prefixes in chunks no larger than
/// this, so a forged header cannot force a huge up-front allocation.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// A [`Sink`] over any [`Write`] implementation.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<(), BufferError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.inner.write_all(bytes)?;
        Ok(())
    }
}

/// A [`Source`] over any [`Read`] implementation.
///
/// Holds at most one byte of lookahead, used by [`IoSource::is_eof`] to
/// tell a clean end of stream from a value boundary.
pub struct IoSource<R> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    /// Returns `true` when the stream has no more bytes.
    pub fn is_eof(&mut self) -> Result<bool, BufferError> {
        if self.peeked.is_some() {
            return Ok(false);
        }
        let mut b = [0u8; 1];
        loop {
            match self.inner.read(&mut b) {
                Ok(0) => return Ok(true),
                Ok(_) => {
                    self.peeked = Some(b[0]);
                    return Ok(false);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn map_read_err(e: std::io::Error) -> BufferError {
    if e.kind() == ErrorKind::UnexpectedEof {
        BufferError::EndOfBuffer
    } else {
        BufferError::Io(e)
    }
}

impl<R: Read> Source for IoSource<R> {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        if buf.is_empty() {
            return Ok(());
        }
        let rest = match self.peeked.take() {
            Some(b) => {
                buf[0] = b;
                &mut buf[1..]
            }
            None => buf,
        };
        self.inner.read_exact(rest).map_err(map_read_err)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, BufferError> {
        let mut out = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        if len == 0 {
            return Ok(out);
        }
        if let Some(b) = self.peeked.take() {
            out.push(b);
        }
        let remaining = (len - out.len()) as u64;
        (&mut self.inner)
            .take(remaining)
            .read_to_end(&mut out)
            .map_err(map_read_err)?;
        if out.len() < len {
            return Err(BufferError::EndOfBuffer);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn io_sink_writes_through() {
        let mut sink = IoSink::new(Vec::new());
        sink.write_u8(0xda).unwrap();
        sink.write_u16(0x0020).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.into_inner(), [0xda, 0x00, 0x20]);
    }

    #[test]
    fn io_source_reads_and_detects_eof() {
        let mut source = IoSource::new(Cursor::new(vec![0x01, 0x02, 0x03]));
        assert!(!source.is_eof().unwrap());
        assert!(!source.is_eof().unwrap());
        assert_eq!(source.read_u16().unwrap(), 0x0102);
        assert_eq!(source.read_bytes(1).unwrap(), [0x03]);
        assert!(source.is_eof().unwrap());
    }

    #[test]
    fn io_source_short_read_is_end_of_buffer() {
        let mut source = IoSource::new(Cursor::new(vec![0x01]));
        assert!(matches!(source.read_u16(), Err(BufferError::EndOfBuffer)));
        let mut source = IoSource::new(Cursor::new(vec![0x01, 0x02]));
        assert!(matches!(
            source.read_bytes(1 << 30),
            Err(BufferError::EndOfBuffer)
        ));
    }

    #[test]
    fn io_source_propagates_transport_errors() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::ConnectionReset, "reset"))
            }
        }
        let mut source = IoSource::new(Broken);
        assert!(matches!(source.read_u8(), Err(BufferError::Io(_))));
    }
}
