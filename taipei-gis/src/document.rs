//! Geometry documents as they are loaded, before ingestion.

use std::str::FromStr;

use serde_json::{json, Value};

use crate::error::GisError;

/// A GeoJSON-like document: any JSON object, optionally with a `features` array.
///
/// Nothing beyond "is an object" is validated here. Malformed features are dealt with by the
/// consumer ([`Ingestor`](crate::ingest::Ingestor) skips them).
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDocument(Value);

impl GeometryDocument {
    /// Wraps a JSON value. Fails if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, GisError> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(GisError::InvalidDocument(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )))
        }
    }

    /// Parses a document from raw bytes, as received over the network.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, GisError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Features of the document. Empty if `features` is missing or is not an array.
    pub fn features(&self) -> &[Value] {
        self.0
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The document as a JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the document, returning the JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Built-in document with two demo towers near Taipei 101, used when nothing else is
    /// loaded. The footprints are illustrative, not surveyed outlines.
    pub fn demo_buildings() -> Self {
        Self(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Demo Tower A", "height": 180 },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [121.5638, 25.0333],
                            [121.5643, 25.0333],
                            [121.5643, 25.0338],
                            [121.5638, 25.0338],
                            [121.5638, 25.0333]
                        ]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Demo Tower B", "height": 120 },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [121.5646, 25.0336],
                            [121.5650, 25.0336],
                            [121.5650, 25.0340],
                            [121.5646, 25.0340],
                            [121.5646, 25.0336]
                        ]]
                    }
                }
            ]
        }))
    }
}

impl FromStr for GeometryDocument {
    type Err = GisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
