/// Encoder contract tests: exact wire bytes for every rung of every ladder.
///
/// Format reference: github.com/msgpack/msgpack/blob/master/spec.md
use msgpack_core::{encode, encode_json, encode_with, EncodeError, EncodeOptions, Value};

fn bytes(value: impl Into<Value>) -> Vec<u8> {
    encode(&value.into()).unwrap()
}

fn map(pairs: &[(&str, Value)]) -> Value {
    Value::Map(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

// ============================================================================
// Nil / Bool
// ============================================================================

#[test]
fn encode_nil() {
    assert_eq!(bytes(Value::Nil), [0xc0]);
}

#[test]
fn encode_true() {
    assert_eq!(bytes(true), [0xc3]);
}

#[test]
fn encode_false() {
    assert_eq!(bytes(false), [0xc2]);
}

// ============================================================================
// Unsigned ladder
// ============================================================================

#[test]
fn encode_positive_fixint() {
    assert_eq!(bytes(0u64), [0x00]);
    assert_eq!(bytes(1u64), [0x01]);
    assert_eq!(bytes(127u64), [0x7f]);
}

#[test]
fn encode_uint8() {
    assert_eq!(bytes(128u64), [0xcc, 0x80]);
    assert_eq!(bytes(255u64), [0xcc, 0xff]);
}

#[test]
fn encode_uint16() {
    assert_eq!(bytes(256u64), [0xcd, 0x01, 0x00]);
    assert_eq!(bytes(65535u64), [0xcd, 0xff, 0xff]);
}

#[test]
fn encode_uint32() {
    assert_eq!(bytes(65536u64), [0xce, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(bytes(4_294_967_295u64), [0xce, 0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn encode_uint64() {
    assert_eq!(
        bytes(4_294_967_296u64),
        [0xcf, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        bytes(u64::MAX),
        [0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn non_negative_signed_ints_use_unsigned_ladder() {
    assert_eq!(bytes(127i64), [0x7f]);
    assert_eq!(bytes(128i64), [0xcc, 0x80]);
    assert_eq!(bytes(65536i64), [0xce, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(
        bytes(i64::MAX),
        [0xcf, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

// ============================================================================
// Negative ladder
// ============================================================================

#[test]
fn encode_negative_fixint() {
    assert_eq!(bytes(-1i64), [0xff]);
    assert_eq!(bytes(-32i64), [0xe0]);
}

#[test]
fn encode_int8() {
    assert_eq!(bytes(-33i64), [0xd0, 0xdf]);
    assert_eq!(bytes(-128i64), [0xd0, 0x80]);
}

#[test]
fn encode_int16() {
    assert_eq!(bytes(-129i64), [0xd1, 0xff, 0x7f]);
    assert_eq!(bytes(-32768i64), [0xd1, 0x80, 0x00]);
}

#[test]
fn encode_int32() {
    assert_eq!(bytes(-32769i64), [0xd2, 0xff, 0xff, 0x7f, 0xff]);
    assert_eq!(bytes(-2_147_483_648i64), [0xd2, 0x80, 0x00, 0x00, 0x00]);
}

#[test]
fn encode_int64() {
    assert_eq!(
        bytes(-2_147_483_649i64),
        [0xd3, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        bytes(i64::MIN),
        [0xd3, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

// ============================================================================
// Floats
// ============================================================================

#[test]
fn encode_float32() {
    assert_eq!(bytes(0.0f32), [0xca, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(bytes(1.5f32), [0xca, 0x3f, 0xc0, 0x00, 0x00]);
}

#[test]
fn encode_float64() {
    assert_eq!(
        bytes(0.0f64),
        [0xcb, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        bytes(1.5f64),
        [0xcb, 0x3f, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn float64_is_never_narrowed() {
    // 1.5 fits exactly in an f32, but the declared width wins.
    assert_eq!(bytes(1.5f64)[0], 0xcb);
    assert_eq!(bytes(1.5f64).len(), 9);
}

#[test]
fn float_special_values_are_bit_exact() {
    assert_eq!(
        bytes(f64::INFINITY),
        [0xcb, 0x7f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(bytes(-0.0f32), [0xca, 0x80, 0x00, 0x00, 0x00]);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn encode_fixstr() {
    assert_eq!(bytes(""), [0xa0]);
    assert_eq!(bytes("abc"), [0xa3, 0x61, 0x62, 0x63]);
}

#[test]
fn encode_fixstr_max() {
    let out = bytes("x".repeat(31));
    assert_eq!(out[0], 0xbf);
    assert_eq!(out.len(), 32);
}

#[test]
fn encode_str8() {
    let out = bytes("x".repeat(32));
    assert_eq!(&out[..2], [0xd9, 0x20]);
    assert_eq!(out.len(), 34);
    let out = bytes("x".repeat(255));
    assert_eq!(&out[..2], [0xd9, 0xff]);
}

#[test]
fn encode_str16() {
    let out = bytes("x".repeat(256));
    assert_eq!(&out[..3], [0xda, 0x01, 0x00]);
    let out = bytes("x".repeat(65535));
    assert_eq!(&out[..3], [0xda, 0xff, 0xff]);
    assert_eq!(out.len(), 65538);
}

#[test]
fn encode_str32() {
    let out = bytes("x".repeat(65536));
    assert_eq!(&out[..5], [0xdb, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(out.len(), 65541);
}

#[test]
fn string_length_counts_utf8_bytes() {
    // "é" is two bytes in UTF-8
    assert_eq!(bytes("é"), [0xa2, 0xc3, 0xa9]);
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn encode_empty_bin_keeps_header() {
    assert_eq!(bytes(Vec::<u8>::new()), [0xc4, 0x00]);
}

#[test]
fn encode_bin8() {
    assert_eq!(bytes(vec![0xdeu8, 0xad]), [0xc4, 0x02, 0xde, 0xad]);
    let out = bytes(vec![0u8; 255]);
    assert_eq!(&out[..2], [0xc4, 0xff]);
}

#[test]
fn encode_bin16() {
    let out = bytes(vec![7u8; 256]);
    assert_eq!(&out[..3], [0xc5, 0x01, 0x00]);
    assert_eq!(out.len(), 259);
}

#[test]
fn encode_bin32() {
    let out = bytes(vec![7u8; 65536]);
    assert_eq!(&out[..5], [0xc6, 0x00, 0x01, 0x00, 0x00]);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn encode_empty_array() {
    assert_eq!(bytes(Vec::<Value>::new()), [0x90]);
}

#[test]
fn encode_fixarray() {
    let arr = Value::Array(vec![1u64.into(), "a".into(), Value::Nil]);
    assert_eq!(encode(&arr).unwrap(), [0x93, 0x01, 0xa1, 0x61, 0xc0]);
}

#[test]
fn encode_fixarray_max() {
    let out = bytes(vec![Value::Nil; 15]);
    assert_eq!(out[0], 0x9f);
    assert_eq!(out.len(), 16);
}

#[test]
fn encode_array16() {
    let out = bytes(vec![Value::Nil; 16]);
    assert_eq!(&out[..3], [0xdc, 0x00, 0x10]);
    assert_eq!(out.len(), 19);
    let out = bytes(vec![Value::Nil; 65535]);
    assert_eq!(&out[..3], [0xdc, 0xff, 0xff]);
}

#[test]
fn encode_array32() {
    let out = bytes(vec![Value::Bool(true); 65536]);
    assert_eq!(&out[..5], [0xdd, 0x00, 0x01, 0x00, 0x00]);
    assert!(out[5..].iter().all(|&b| b == 0xc3));
}

#[test]
fn encode_nested_arrays_in_order() {
    let arr = Value::Array(vec![
        Value::Array(vec![1u64.into(), 2u64.into()]),
        Value::Array(vec![]),
        3u64.into(),
    ]);
    assert_eq!(
        encode(&arr).unwrap(),
        [0x93, 0x92, 0x01, 0x02, 0x90, 0x03]
    );
}

// ============================================================================
// Maps
// ============================================================================

#[test]
fn encode_empty_map() {
    assert_eq!(bytes(map(&[])), [0x80]);
}

#[test]
fn encode_map_sorted_by_key() {
    let m = map(&[
        ("c", 3u64.into()),
        ("a", 1u64.into()),
        ("b", 2u64.into()),
    ]);
    assert_eq!(
        encode(&m).unwrap(),
        [0x83, 0xa1, 0x61, 0x01, 0xa1, 0x62, 0x02, 0xa1, 0x63, 0x03]
    );
}

#[test]
fn encode_map_with_string_value() {
    let m = map(&[("foo", "bar".into())]);
    assert_eq!(
        encode(&m).unwrap(),
        [0x81, 0xa3, 0x66, 0x6f, 0x6f, 0xa3, 0x62, 0x61, 0x72]
    );
}

#[test]
fn map_keys_sort_bytewise() {
    // Uppercase sorts before lowercase; a prefix sorts before its extensions.
    let m = map(&[("b", Value::Nil), ("B", Value::Nil), ("ab", Value::Nil), ("a", Value::Nil)]);
    assert_eq!(
        encode(&m).unwrap(),
        [
            0x84, 0xa1, b'B', 0xc0, 0xa1, b'a', 0xc0, 0xa2, b'a', b'b', 0xc0, 0xa1, b'b', 0xc0
        ]
    );
}

#[test]
fn encode_map16() {
    let pairs: Vec<(String, Value)> = (0..16).map(|i| (format!("k{i:02}"), Value::Nil)).collect();
    let out = encode(&Value::Map(pairs)).unwrap();
    assert_eq!(&out[..3], [0xde, 0x00, 0x10]);
    // first entry after sorting is "k00"
    assert_eq!(&out[3..7], [0xa3, b'k', b'0', b'0']);
}

#[test]
fn encode_map32() {
    let pairs: Vec<(String, Value)> = (0..65536u32)
        .map(|i| (format!("{i:05}"), Value::Nil))
        .collect();
    let out = encode(&Value::Map(pairs)).unwrap();
    assert_eq!(&out[..5], [0xdf, 0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn nested_maps_are_sorted_at_every_level() {
    let inner = map(&[("y", 2u64.into()), ("x", 1u64.into())]);
    let outer = map(&[("z", inner), ("a", Value::Nil)]);
    assert_eq!(
        encode(&outer).unwrap(),
        [
            0x82, 0xa1, b'a', 0xc0, 0xa1, b'z', 0x82, 0xa1, b'x', 0x01, 0xa1, b'y', 0x02
        ]
    );
}

#[test]
fn map_insertion_order_does_not_change_bytes() {
    let forward = map(&[("one", 1u64.into()), ("two", 2u64.into()), ("three", 3u64.into())]);
    let reverse = map(&[("three", 3u64.into()), ("two", 2u64.into()), ("one", 1u64.into())]);
    assert_eq!(encode(&forward).unwrap(), encode(&reverse).unwrap());
}

#[test]
fn duplicate_keys_keep_insertion_order() {
    let m = map(&[("k", 2u64.into()), ("a", Value::Nil), ("k", 1u64.into())]);
    assert_eq!(
        encode(&m).unwrap(),
        [0x83, 0xa1, b'a', 0xc0, 0xa1, b'k', 0x02, 0xa1, b'k', 0x01]
    );
}

// ============================================================================
// Depth limit
// ============================================================================

fn nested_arrays(levels: usize) -> Value {
    let mut value = Value::Nil;
    for _ in 0..levels {
        value = Value::Array(vec![value]);
    }
    value
}

#[test]
fn nesting_up_to_limit_is_accepted() {
    let opts = EncodeOptions::new().with_max_depth(3);
    assert_eq!(
        encode_with(&nested_arrays(3), &opts).unwrap(),
        [0x91, 0x91, 0x91, 0xc0]
    );
}

#[test]
fn nesting_past_limit_is_an_error() {
    let opts = EncodeOptions::new().with_max_depth(3);
    let err = encode_with(&nested_arrays(4), &opts).unwrap_err();
    assert!(matches!(err, EncodeError::DepthLimitExceeded { max_depth: 3 }));
}

#[test]
fn zero_depth_allows_scalars_only() {
    let opts = EncodeOptions::new().with_max_depth(0);
    assert_eq!(encode_with(&Value::from(5u8), &opts).unwrap(), [0x05]);
    assert!(encode_with(&Value::Array(vec![]), &opts).is_err());
    assert!(encode_with(&map(&[]), &opts).is_err());
}

#[test]
fn default_limit_rejects_very_deep_input() {
    let err = encode(&nested_arrays(msgpack_core::DEFAULT_MAX_DEPTH + 1)).unwrap_err();
    assert!(matches!(err, EncodeError::DepthLimitExceeded { .. }));
    assert!(encode(&nested_arrays(msgpack_core::DEFAULT_MAX_DEPTH)).is_ok());
}

#[test]
fn depth_error_inside_map_value_aborts_everything() {
    let opts = EncodeOptions::new().with_max_depth(2);
    let m = map(&[("ok", 1u64.into()), ("deep", nested_arrays(2))]);
    assert!(encode_with(&m, &opts).is_err());
}

// ============================================================================
// JSON entry point
// ============================================================================

#[test]
fn encode_json_document() {
    assert_eq!(
        encode_json(r#"{"a":1,"b":2,"c":3}"#).unwrap(),
        [0x83, 0xa1, 0x61, 0x01, 0xa1, 0x62, 0x02, 0xa1, 0x63, 0x03]
    );
}

#[test]
fn encode_json_numbers() {
    assert_eq!(encode_json("-33").unwrap(), [0xd0, 0xdf]);
    assert_eq!(encode_json("128").unwrap(), [0xcc, 0x80]);
    assert_eq!(
        encode_json("0.5").unwrap(),
        [0xcb, 0x3f, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn encode_json_rejects_invalid_input() {
    assert!(matches!(
        encode_json("[1,").unwrap_err(),
        EncodeError::JsonParse(_)
    ));
}
