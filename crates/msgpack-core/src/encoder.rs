//! MessagePack encoder — converts a [`Value`] tree into wire-format bytes.
//!
//! Every value is written with the narrowest header its family allows:
//!
//! - **Integers**: positive/negative fixint, then 8/16/32/64-bit forms.
//!   Non-negative signed integers use the unsigned ladder.
//! - **Floats**: `float 32` or `float 64`, matching the declared width.
//! - **Strings / binary**: fixstr (strings only), then 8/16/32-bit lengths.
//! - **Arrays / maps**: fixarray/fixmap, then 16/32-bit counts.
//!   Map entries are emitted in ascending key order, so equal maps always
//!   produce identical bytes.
//!
//! Nested containers are walked with an explicit work stack instead of
//! recursion; nesting beyond [`EncodeOptions::max_depth`] is an error.
//!
//! # Example
//! ```
//! use msgpack_core::{encode, Value};
//! let map = Value::Map(vec![("foo".into(), Value::from("bar"))]);
//! assert_eq!(
//!     encode(&map).unwrap(),
//!     [0x81, 0xa3, b'f', b'o', b'o', 0xa3, b'b', b'a', b'r'],
//! );
//! ```

use crate::error::{EncodeError, Result};
use crate::marker::*;
use crate::options::EncodeOptions;
use crate::types::Value;

/// Encode a value with the default [`EncodeOptions`].
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    encode_with(value, &EncodeOptions::default())
}

/// Encode a value into a fresh buffer.
pub fn encode_with(value: &Value, opts: &EncodeOptions) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(value, opts, &mut out)?;
    Ok(out)
}

/// Append the encoding of `value` to `out`.
///
/// On error `out` is truncated back to its original length, so a failed call
/// never leaves a partial value behind.
pub fn encode_into(value: &Value, opts: &EncodeOptions, out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    match write_value(value, opts.max_depth, out) {
        Ok(()) => {
            log::trace!(
                "msgpack: encoded {} into {} bytes",
                value.type_name(),
                out.len() - start
            );
            Ok(())
        }
        Err(err) => {
            out.truncate(start);
            log::debug!("msgpack: failed to encode {}: {}", value.type_name(), err);
            Err(err)
        }
    }
}

/// Pending work for the traversal. Values carry the nesting level of the
/// container that holds them (0 for the root).
enum Task<'a> {
    Value(&'a Value, usize),
    Key(&'a str),
}

/// Depth-first walk of the value tree. A container's header is written as
/// soon as it is popped; its children are pushed in reverse so they pop in
/// order.
fn write_value(root: &Value, max_depth: usize, out: &mut Vec<u8>) -> Result<()> {
    let mut stack = vec![Task::Value(root, 0)];

    while let Some(task) = stack.pop() {
        let (value, depth) = match task {
            Task::Key(key) => {
                write_str(key, out)?;
                continue;
            }
            Task::Value(value, depth) => (value, depth),
        };

        match value {
            Value::Nil => out.push(NIL),
            Value::Bool(b) => out.push(if *b { TRUE } else { FALSE }),
            Value::Int(i) => write_int(*i, out),
            Value::UInt(u) => write_uint(*u, out),
            Value::F32(f) => {
                out.push(FLOAT_32);
                out.extend_from_slice(&f.to_be_bytes());
            }
            Value::F64(f) => {
                out.push(FLOAT_64);
                out.extend_from_slice(&f.to_be_bytes());
            }
            Value::Str(s) => write_str(s, out)?,
            Value::Bin(bytes) => {
                write_bin_header(bytes.len(), out)?;
                out.extend_from_slice(bytes);
            }
            Value::Array(items) => {
                let level = enter_container(depth, max_depth)?;
                write_array_header(items.len(), out)?;
                stack.extend(items.iter().rev().map(|item| Task::Value(item, level)));
            }
            Value::Map(entries) => {
                let level = enter_container(depth, max_depth)?;
                write_map_header(entries.len(), out)?;
                let mut sorted: Vec<&(String, Value)> = entries.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                for (key, val) in sorted.into_iter().rev() {
                    stack.push(Task::Value(val, level));
                    stack.push(Task::Key(key.as_str()));
                }
            }
        }
    }

    Ok(())
}

/// Nesting level of a container whose parent sits at `depth`.
pub(crate) fn enter_container(depth: usize, max_depth: usize) -> Result<usize> {
    let level = depth + 1;
    if level > max_depth {
        return Err(EncodeError::DepthLimitExceeded { max_depth });
    }
    Ok(level)
}

fn write_uint(v: u64, out: &mut Vec<u8>) {
    if v <= MAX_POSITIVE_FIXINT {
        out.push(v as u8);
    } else if let Ok(v) = u8::try_from(v) {
        out.push(UINT_8);
        out.push(v);
    } else if let Ok(v) = u16::try_from(v) {
        out.push(UINT_16);
        out.extend_from_slice(&v.to_be_bytes());
    } else if let Ok(v) = u32::try_from(v) {
        out.push(UINT_32);
        out.extend_from_slice(&v.to_be_bytes());
    } else {
        out.push(UINT_64);
        out.extend_from_slice(&v.to_be_bytes());
    }
}

fn write_int(v: i64, out: &mut Vec<u8>) {
    if let Ok(u) = u64::try_from(v) {
        write_uint(u, out);
    } else if v >= MIN_NEGATIVE_FIXINT {
        // two's complement byte, 0xe0..=0xff
        out.push(v as u8);
    } else if let Ok(v) = i8::try_from(v) {
        out.push(INT_8);
        out.extend_from_slice(&v.to_be_bytes());
    } else if let Ok(v) = i16::try_from(v) {
        out.push(INT_16);
        out.extend_from_slice(&v.to_be_bytes());
    } else if let Ok(v) = i32::try_from(v) {
        out.push(INT_32);
        out.extend_from_slice(&v.to_be_bytes());
    } else {
        out.push(INT_64);
        out.extend_from_slice(&v.to_be_bytes());
    }
}

fn write_str(s: &str, out: &mut Vec<u8>) -> Result<()> {
    write_str_header(s.len(), out)?;
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

fn write_str_header(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if len <= MAX_FIXSTR_LEN {
        out.push(FIXSTR | len as u8);
    } else if let Ok(len) = u8::try_from(len) {
        out.push(STR_8);
        out.push(len);
    } else if let Ok(len) = u16::try_from(len) {
        out.push(STR_16);
        out.extend_from_slice(&len.to_be_bytes());
    } else if let Ok(len) = u32::try_from(len) {
        out.push(STR_32);
        out.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodeError::out_of_range("str", len));
    }
    Ok(())
}

/// There is no fix form for binary: even an empty payload gets `c4 00`.
fn write_bin_header(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if let Ok(len) = u8::try_from(len) {
        out.push(BIN_8);
        out.push(len);
    } else if let Ok(len) = u16::try_from(len) {
        out.push(BIN_16);
        out.extend_from_slice(&len.to_be_bytes());
    } else if let Ok(len) = u32::try_from(len) {
        out.push(BIN_32);
        out.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodeError::out_of_range("bin", len));
    }
    Ok(())
}

fn write_array_header(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if len <= MAX_FIXARRAY_LEN {
        out.push(FIXARRAY | len as u8);
    } else if let Ok(len) = u16::try_from(len) {
        out.push(ARRAY_16);
        out.extend_from_slice(&len.to_be_bytes());
    } else if let Ok(len) = u32::try_from(len) {
        out.push(ARRAY_32);
        out.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodeError::out_of_range("array", len));
    }
    Ok(())
}

fn write_map_header(len: usize, out: &mut Vec<u8>) -> Result<()> {
    if len <= MAX_FIXMAP_LEN {
        out.push(FIXMAP | len as u8);
    } else if let Ok(len) = u16::try_from(len) {
        out.push(MAP_16);
        out.extend_from_slice(&len.to_be_bytes());
    } else if let Ok(len) = u32::try_from(len) {
        out.push(MAP_32);
        out.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodeError::out_of_range("map", len));
    }
    Ok(())
}
