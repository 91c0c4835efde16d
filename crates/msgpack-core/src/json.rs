//! JSON entry point: `serde_json::Value` → [`Value`] → MessagePack.

use crate::encoder::encode;
use crate::error::Result;
use crate::types::Value;

/// Encode a JSON document as MessagePack.
///
/// Parses the input with `serde_json`, converts it to a [`Value`] and encodes
/// it with the default options. Returns an error if the input is not valid JSON.
///
/// ```
/// use msgpack_core::encode_json;
/// let bytes = encode_json(r#"{"b":2,"a":1}"#).unwrap();
/// assert_eq!(bytes, [0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0x02]);
/// ```
pub fn encode_json(json: &str) -> Result<Vec<u8>> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    encode(&Value::from(parsed))
}

/// Non-negative integers become `UInt`, negative integers `Int`, and every
/// other number `F64`.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // Without `arbitrary_precision` every non-integer Number is an f64.
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
