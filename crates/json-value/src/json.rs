//! Text serialization hooks.
//!
//! Encoding and decoding are delegated to `serde_json`. Number literals never
//! pass through `serde_json::Number`: they are written as raw JSON text and
//! read back from the raw slice of the input, so the stored text survives a
//! round trip byte for byte (including `E` and unsigned exponents).

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error::{Error, Result};
use crate::number::Number;
use crate::value::{Props, Value};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.as_str().to_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        raw.get().trim().parse().map_err(D::Error::custom)
    }
}

/// Builds a value from raw JSON text, one nesting level per call.
///
/// Containers are split into raw children; number children keep the exact
/// slice of the input they were scanned from.
fn decode_raw(raw: &RawValue) -> serde_json::Result<Value> {
    let text = raw.get().trim();
    match text.as_bytes().first() {
        Some(b'[') => {
            let elements: Vec<&RawValue> = serde_json::from_str(text)?;
            elements
                .into_iter()
                .map(decode_raw)
                .collect::<serde_json::Result<Vec<_>>>()
                .map(Value::Array)
        }
        Some(b'{') => {
            let members: IndexMap<String, &RawValue> = serde_json::from_str(text)?;
            members
                .into_iter()
                .map(|(key, value)| decode_raw(value).map(|value| (key, value)))
                .collect::<serde_json::Result<Props>>()
                .map(Value::Object)
        }
        Some(b'-' | b'0'..=b'9') => match text.parse::<Number>() {
            Ok(number) => Ok(Value::Number(number)),
            Err(err) => unreachable!("decoder produced a non-JSON number: {err}"),
        },
        _ => serde_json::from_str::<serde_json::Value>(text).map(Value::from),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(props) => {
                let mut map = serializer.serialize_map(Some(props.len()))?;
                for (key, value) in props {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Only `serde_json` deserializers are supported: number text is recovered
/// from raw JSON slices.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        decode_raw(&raw).map_err(D::Error::custom)
    }
}

/// Numbers keep the text `serde_json::Number` holds, which spells exponents
/// as `e+N`/`e-N`.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.to_string().parse::<Number>() {
                Ok(number) => Value::Number(number),
                Err(err) => unreachable!("decoder produced a non-JSON number: {err}"),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Props>(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Number(n) => match serde_json::Number::from_str(n.as_str()) {
                Ok(number) => serde_json::Value::Number(number),
                Err(err) => unreachable!("number literal {n} rejected by serde_json: {err}"),
            },
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(elements) => serde_json::Value::Array(
                elements.into_iter().map(serde_json::Value::from).collect(),
            ),
            Value::Object(props) => serde_json::Value::Object(
                props
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn parse_failed(err: serde_json::Error) -> Error {
    tracing::debug!(error = %err, "failed to decode JSON document");
    Error::Parse(err)
}

impl Value {
    /// Decodes a JSON document, keeping number literals as written.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let doc = Value::from_json_str(r#"{"pi": 3.14159265358979323846264338327950288}"#).unwrap();
    /// assert_eq!(
    ///     doc.object_get_elm("pi").number_get().as_str(),
    ///     "3.14159265358979323846264338327950288"
    /// );
    /// assert!(Value::from_json_str("{").is_err());
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(parse_failed)
    }

    /// Decodes a JSON document from UTF-8 bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(parse_failed)
    }

    /// Encodes this value as compact JSON text; numbers are written verbatim.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::{Number, Value};
    ///
    /// let value = Value::array([Value::number("1E5".parse::<Number>().unwrap())]);
    /// assert_eq!(value.marshal_json().unwrap(), "[1E5]");
    /// ```
    pub fn marshal_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }

    /// Encodes this value as indented JSON text.
    pub fn marshal_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Encode)
    }

    /// Decodes `text` into this node.
    ///
    /// On failure the node keeps its previous content.
    pub fn unmarshal_json(&mut self, text: &str) -> Result<()> {
        let decoded = Value::from_json_str(text)?;
        self.assign_from(decoded);
        Ok(())
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Value::from_json_str(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.marshal_json().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
