//! Firestore typed JSON encoding.
//!
//! Firestore REST 的类型化 JSON 编码：每个值都是只有一个键的对象，
//! 例如 `{"stringValue": "x"}`。

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use blog_core::blog::{Document, DocumentFields, FieldValue};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub(crate) type WireFields = BTreeMap<String, WireValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum WireValue {
    NullValue(()),
    BooleanValue(bool),
    /// int64 travels as a decimal string.
    IntegerValue(#[serde(with = "integer_repr")] i64),
    DoubleValue(#[serde(with = "double_repr")] f64),
    /// RFC 3339, UTC.
    TimestampValue(String),
    StringValue(String),
    /// Base64.
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(WireLatLng),
    ArrayValue(WireArray),
    MapValue(WireMap),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WireLatLng {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct WireArray {
    #[serde(default)]
    pub values: Vec<WireValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct WireMap {
    #[serde(default)]
    pub fields: WireFields,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireDocument {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub fields: WireFields,
    #[serde(default, skip_serializing)]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing)]
    pub update_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<WireDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommitRequest {
    pub writes: Vec<Write>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Write {
    pub update: WireDocument,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update_transforms: Vec<FieldTransform>,
    pub current_document: Precondition,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldTransform {
    pub field_path: String,
    pub set_to_server_value: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct Precondition {
    pub exists: bool,
}

/// `{"error": {...}}` body of a failed call.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorStatus,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorStatus {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

pub(crate) fn encode_value(value: &FieldValue) -> WireValue {
    match value {
        FieldValue::Null => WireValue::NullValue(()),
        FieldValue::Boolean(b) => WireValue::BooleanValue(*b),
        FieldValue::Integer(i) => WireValue::IntegerValue(*i),
        FieldValue::Double(d) => WireValue::DoubleValue(*d),
        FieldValue::String(s) => WireValue::StringValue(s.clone()),
        FieldValue::Timestamp(ts) => {
            WireValue::TimestampValue(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        FieldValue::Bytes(bytes) => WireValue::BytesValue(BASE64.encode(bytes)),
        FieldValue::Reference(path) => WireValue::ReferenceValue(path.clone()),
        FieldValue::GeoPoint {
            latitude,
            longitude,
        } => WireValue::GeoPointValue(WireLatLng {
            latitude: *latitude,
            longitude: *longitude,
        }),
        FieldValue::Array(items) => WireValue::ArrayValue(WireArray {
            values: items.iter().map(encode_value).collect(),
        }),
        FieldValue::Map(fields) => WireValue::MapValue(WireMap {
            fields: encode_fields(fields),
        }),
    }
}

pub(crate) fn encode_fields(fields: &DocumentFields) -> WireFields {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

pub(crate) fn decode_value(value: WireValue) -> Result<FieldValue, String> {
    Ok(match value {
        WireValue::NullValue(()) => FieldValue::Null,
        WireValue::BooleanValue(b) => FieldValue::Boolean(b),
        WireValue::IntegerValue(i) => FieldValue::Integer(i),
        WireValue::DoubleValue(d) => FieldValue::Double(d),
        WireValue::TimestampValue(raw) => FieldValue::Timestamp(
            DateTime::parse_from_rfc3339(&raw)
                .map_err(|e| format!("invalid timestamp '{raw}': {e}"))?
                .with_timezone(&Utc),
        ),
        WireValue::StringValue(s) => FieldValue::String(s),
        WireValue::BytesValue(raw) => FieldValue::Bytes(
            BASE64
                .decode(raw.as_bytes())
                .map_err(|e| format!("invalid bytes value: {e}"))?,
        ),
        WireValue::ReferenceValue(path) => FieldValue::Reference(path),
        WireValue::GeoPointValue(point) => FieldValue::GeoPoint {
            latitude: point.latitude,
            longitude: point.longitude,
        },
        WireValue::ArrayValue(array) => FieldValue::Array(
            array
                .values
                .into_iter()
                .map(decode_value)
                .collect::<Result<_, _>>()?,
        ),
        WireValue::MapValue(map) => FieldValue::Map(decode_fields(map.fields)?),
    })
}

pub(crate) fn decode_fields(fields: WireFields) -> Result<DocumentFields, String> {
    fields
        .into_iter()
        .map(|(key, value)| decode_value(value).map(|value| (key, value)))
        .collect()
}

/// The id is the last segment of the resource name.
pub(crate) fn decode_document(document: WireDocument) -> Result<Document, String> {
    let id = document
        .name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("document name '{}' has no id", document.name))?
        .to_string();
    Ok(Document::new(id, decode_fields(document.fields)?))
}

mod integer_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Non-finite doubles travel as `"NaN"`, `"Infinity"` and `"-Infinity"`.
mod double_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() && value.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else if value.is_infinite() {
            serializer.serialize_str("-Infinity")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => match s.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => other.parse().map_err(serde::de::Error::custom),
            },
        }
    }
}
