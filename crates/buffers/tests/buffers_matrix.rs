//! Writer/Reader and sink/source matrix for the buffers crate.

use std::io::Cursor;

use msgpack_pure_buffers::{BufferError, IoSink, IoSource, Reader, Sink, Source, Writer};

// ---------------------------------------------------------------------------
// Writer → Reader
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7F);
    w.u8(0xFF);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.read_u8().unwrap(), 0x00);
    assert_eq!(r.read_u8().unwrap(), 0x7F);
    assert_eq!(r.read_u8().unwrap(), 0xFF);
}

#[test]
fn roundtrip_u16() {
    let mut w = Writer::new();
    w.u16(0);
    w.u16(0x0102);
    w.u16(u16::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.read_u16().unwrap(), 0);
    assert_eq!(r.read_u16().unwrap(), 0x0102);
    assert_eq!(r.read_u16().unwrap(), u16::MAX);
}

#[test]
fn roundtrip_u32() {
    let mut w = Writer::new();
    w.u32(0);
    w.u32(0x01020304);
    w.u32(u32::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.read_u32().unwrap(), 0);
    assert_eq!(r.read_u32().unwrap(), 0x01020304);
    assert_eq!(r.read_u32().unwrap(), u32::MAX);
}

#[test]
fn roundtrip_u64_and_i64() {
    let mut w = Writer::new();
    w.u64(u64::MAX);
    w.u64(i64::MIN as u64);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.read_u64().unwrap(), u64::MAX);
    assert_eq!(r.read_i64().unwrap(), i64::MIN);
}

#[test]
fn roundtrip_f64() {
    let mut w = Writer::new();
    w.f64(0.0);
    w.f64(std::f64::consts::PI);
    w.f64(-std::f64::consts::E);
    w.f64(f64::INFINITY);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.read_f64().unwrap(), 0.0);
    assert_eq!(r.read_f64().unwrap(), std::f64::consts::PI);
    assert_eq!(r.read_f64().unwrap(), -std::f64::consts::E);
    assert_eq!(r.read_f64().unwrap(), f64::INFINITY);
}

#[test]
fn roundtrip_f64_nan() {
    let mut w = Writer::new();
    w.f64(f64::NAN);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert!(r.read_f64().unwrap().is_nan());
}

#[test]
fn roundtrip_buf() {
    let mut w = Writer::new();
    w.buf(&[]);
    w.buf(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.buf(0).unwrap(), &[] as &[u8]);
    assert_eq!(r.buf(4).unwrap(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert!(matches!(r.buf(1), Err(BufferError::EndOfBuffer)));
}

#[test]
fn header_helpers_match_big_endian_layout() {
    let mut w = Writer::new();
    w.u8u16(0xda, 0x0020);
    w.u8u32(0xdb, 0x0001_0000);
    w.u8f64(0xcb, 0.5);
    assert_eq!(
        w.flush(),
        [
            0xda, 0x00, 0x20, //
            0xdb, 0x00, 0x01, 0x00, 0x00, //
            0xcb, 0x3f, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]
    );
}

// ---------------------------------------------------------------------------
// io adapters
// ---------------------------------------------------------------------------

#[test]
fn io_sink_and_source_agree() {
    let mut sink = IoSink::new(Vec::new());
    sink.write_u8(0xcf).unwrap();
    sink.write_u64(0x0000_0001_0000_0000).unwrap();
    sink.write_bytes(b"tail").unwrap();
    let bytes = sink.into_inner();

    let mut source = IoSource::new(Cursor::new(bytes));
    assert_eq!(source.read_u8().unwrap(), 0xcf);
    assert_eq!(source.read_u64().unwrap(), 1 << 32);
    assert_eq!(source.read_bytes(4).unwrap(), b"tail");
    assert!(source.is_eof().unwrap());
}

#[test]
fn io_source_peek_then_bulk_read() {
    let mut source = IoSource::new(Cursor::new(b"abc".to_vec()));
    assert!(!source.is_eof().unwrap());
    assert_eq!(source.read_bytes(3).unwrap(), b"abc");
    assert!(matches!(source.read_u8(), Err(BufferError::EndOfBuffer)));
}

#[test]
fn slice_and_stream_sources_fail_alike() {
    let data = [0xcd, 0x01];
    let mut r = Reader::new(&data);
    r.read_u8().unwrap();
    assert!(matches!(r.read_u16(), Err(BufferError::EndOfBuffer)));

    let mut s = IoSource::new(Cursor::new(data.to_vec()));
    s.read_u8().unwrap();
    assert!(matches!(s.read_u16(), Err(BufferError::EndOfBuffer)));
}
