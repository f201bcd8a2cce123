//! Tag bytes of the wire format.

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;
pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

/// `0b101xxxxx`, low 5 bits carry the length.
pub const FIXRAW: u8 = 0xa0;
pub const RAW16: u8 = 0xda;
pub const RAW32: u8 = 0xdb;

/// `0b1001xxxx`, low 4 bits carry the element count.
pub const FIXARRAY: u8 = 0x90;
pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;

/// `0b1000xxxx`, low 4 bits carry the entry count.
pub const FIXMAP: u8 = 0x80;
pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

pub const FIXRAW_MAX: usize = 0x1f;
pub const FIXCONTAINER_MAX: usize = 0x0f;
