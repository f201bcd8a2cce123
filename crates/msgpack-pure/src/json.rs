//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! JSON strings become raws holding their UTF-8 bytes. Going the other way,
//! raws and map keys must be valid UTF-8 text and floats must be finite.

use serde_json::{Map, Number};

use crate::{MsgPackError, Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i as i128)
                } else if let Some(u) = n.as_u64() {
                    Value::Integer(u as i128)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Raw(s.into_bytes()),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Raw(k.into_bytes()), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = MsgPackError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        to_json(v)
    }
}

/// Converts a JSON document into a codec value.
pub fn from_json(json: &serde_json::Value) -> Value {
    Value::from(json.clone())
}

/// Converts a codec value into a JSON document.
pub fn to_json(value: &Value) -> Result<serde_json::Value, MsgPackError> {
    Ok(match value {
        Value::Nil => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => {
            if let Ok(n) = i64::try_from(*i) {
                serde_json::Value::Number(n.into())
            } else if let Ok(n) = u64::try_from(*i) {
                serde_json::Value::Number(n.into())
            } else {
                return Err(MsgPackError::ValueOutOfRange("integer"));
            }
        }
        Value::Float(f) => Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or(MsgPackError::UnsupportedType("non-finite float"))?,
        Value::Raw(b) => serde_json::Value::String(utf8(b)?),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect::<Result<_, _>>()?)
        }
        Value::Map(entries) => {
            let mut obj = Map::with_capacity(entries.len());
            for (key, val) in entries {
                let key = match key {
                    Value::Raw(b) => utf8(b)?,
                    _ => return Err(MsgPackError::UnsupportedType("non-raw map key")),
                };
                obj.insert(key, to_json(val)?);
            }
            serde_json::Value::Object(obj)
        }
    })
}

fn utf8(bytes: &[u8]) -> Result<String, MsgPackError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| MsgPackError::UnsupportedType("non-UTF-8 raw"))
}
