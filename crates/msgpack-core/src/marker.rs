//! MessagePack tag bytes and the size limits of the fixed-width forms.
//!
//! See <https://github.com/msgpack/msgpack/blob/master/spec.md>.

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const BIN_8: u8 = 0xc4;
pub const BIN_16: u8 = 0xc5;
pub const BIN_32: u8 = 0xc6;

pub const FLOAT_32: u8 = 0xca;
pub const FLOAT_64: u8 = 0xcb;

pub const UINT_8: u8 = 0xcc;
pub const UINT_16: u8 = 0xcd;
pub const UINT_32: u8 = 0xce;
pub const UINT_64: u8 = 0xcf;

pub const INT_8: u8 = 0xd0;
pub const INT_16: u8 = 0xd1;
pub const INT_32: u8 = 0xd2;
pub const INT_64: u8 = 0xd3;

pub const STR_8: u8 = 0xd9;
pub const STR_16: u8 = 0xda;
pub const STR_32: u8 = 0xdb;

pub const ARRAY_16: u8 = 0xdc;
pub const ARRAY_32: u8 = 0xdd;
pub const MAP_16: u8 = 0xde;
pub const MAP_32: u8 = 0xdf;

/// `101xxxxx`
pub const FIXSTR: u8 = 0xa0;
/// `1001xxxx`
pub const FIXARRAY: u8 = 0x90;
/// `1000xxxx`
pub const FIXMAP: u8 = 0x80;

pub const MAX_POSITIVE_FIXINT: u64 = 0x7f;
pub const MIN_NEGATIVE_FIXINT: i64 = -32;
pub const MAX_FIXSTR_LEN: usize = 31;
pub const MAX_FIXARRAY_LEN: usize = 15;
pub const MAX_FIXMAP_LEN: usize = 15;
