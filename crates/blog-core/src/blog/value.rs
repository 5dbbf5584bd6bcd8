use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use super::DocumentFields;

/// A single document field value.
///
/// Mirrors the value model of the hosted document database so that fields
/// this application does not know about survive a read/write round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(DateTime<Utc>),
    Bytes(Vec<u8>),
    /// Path of another document.
    Reference(String),
    GeoPoint { latitude: f64, longitude: f64 },
    Array(Vec<FieldValue>),
    Map(DocumentFields),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Integer(_) => "integer",
            FieldValue::Double(_) => "double",
            FieldValue::String(_) => "string",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Reference(_) => "reference",
            FieldValue::GeoPoint { .. } => "geo_point",
            FieldValue::Array(_) => "array",
            FieldValue::Map(_) => "map",
        }
    }

    /// Plain JSON rendering for display.
    ///
    /// Lossy: timestamps become RFC 3339 strings and bytes become base64.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Boolean(b) => Value::Bool(*b),
            FieldValue::Integer(i) => json!(i),
            FieldValue::Double(d) => json!(d),
            FieldValue::String(s) => Value::String(s.clone()),
            FieldValue::Timestamp(ts) => {
                Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            FieldValue::Bytes(bytes) => Value::String(BASE64.encode(bytes)),
            FieldValue::Reference(path) => Value::String(path.clone()),
            FieldValue::GeoPoint {
                latitude,
                longitude,
            } => json!({ "latitude": latitude, "longitude": longitude }),
            FieldValue::Array(values) => Value::Array(values.iter().map(Self::to_json).collect()),
            FieldValue::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accessors_only_match_their_own_type() {
        let s = FieldValue::from("hello");
        assert_eq!(s.as_str(), Some("hello"));
        assert_eq!(s.as_timestamp(), None);

        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let t = FieldValue::from(ts);
        assert_eq!(t.as_timestamp(), Some(ts));
        assert_eq!(t.as_str(), None);
    }

    #[test]
    fn to_json_renders_nested_values() {
        let mut inner = DocumentFields::new();
        inner.insert("views".into(), FieldValue::Integer(3));
        let value = FieldValue::Array(vec![
            FieldValue::Null,
            FieldValue::Bytes(vec![1, 2, 3]),
            FieldValue::Map(inner),
        ]);

        assert_eq!(
            value.to_json(),
            json!([null, "AQID", { "views": 3 }])
        );
    }
}
