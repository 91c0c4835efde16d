//! # msgpack-core
//!
//! Pure-Rust **MessagePack** encoder.
//!
//! Given a [`Value`], the encoder picks the most compact header for every
//! scalar and container and writes deterministic, bit-exact MessagePack:
//! integers and lengths always use the narrowest form that fits, floats keep
//! their declared width, and map entries are emitted in ascending key order so
//! equal maps produce identical bytes.
//!
//! ## Quick start
//!
//! ```rust
//! use msgpack_core::{encode, encode_json, Value};
//!
//! assert_eq!(encode(&Value::from(128u8)).unwrap(), [0xcc, 0x80]);
//! assert_eq!(encode(&Value::from("abc")).unwrap(), [0xa3, b'a', b'b', b'c']);
//!
//! // JSON → MessagePack
//! let bytes = encode_json(r#"{"c":3,"a":1,"b":2}"#).unwrap();
//! assert_eq!(bytes, [0x83, 0xa1, b'a', 1, 0xa1, b'b', 2, 0xa1, b'c', 3]);
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — `Value` → MessagePack bytes
//! - [`types`] — the `Value` tree
//! - [`options`] — `EncodeOptions` (nesting limit)
//! - [`json`] — JSON string → MessagePack
//! - [`ser`] — any `serde::Serialize` type → `Value`
//! - [`marker`] — format tag bytes
//! - [`error`] — error types

pub mod encoder;
pub mod error;
pub mod json;
pub mod marker;
pub mod options;
pub mod ser;
pub mod types;

pub use encoder::{encode, encode_into, encode_with};
pub use error::{EncodeError, Result};
pub use json::encode_json;
pub use options::{EncodeOptions, DEFAULT_MAX_DEPTH};
pub use ser::{to_value, to_value_with, to_vec, to_vec_with};
pub use types::Value;
