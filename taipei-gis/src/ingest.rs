//! Conversion of GeoJSON-like documents into rows for an extruded polygon layer.
//!
//! Every feature of the document produces a [`FeatureOutcome`]: either a [`RenderRow`] or the
//! reason it was skipped. A malformed feature never fails the whole document. [`ingest`] drops
//! the skipped ones and returns the rows in document order.
//!
//! ```
//! use taipei_gis::document::GeometryDocument;
//! use taipei_gis::ingest::ingest;
//!
//! let rows = ingest(&GeometryDocument::demo_buildings());
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].height, 180.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use taipei_gis_types::{Position, Ring};

use crate::document::GeometryDocument;

/// Property keys the height is read from, in priority order.
pub const HEIGHT_KEYS: [&str; 2] = ["height", "ele"];
/// Height of a feature that has no usable height property.
pub const DEFAULT_HEIGHT: f64 = 30.0;
/// Name of a feature that has no `name` property.
pub const DEFAULT_NAME: &str = "building";

/// One extruded polygon of the layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRow {
    /// Display name.
    pub name: String,
    /// Extrusion height in meters.
    pub height: f64,
    /// Outer ring of the polygon. Inner rings of the source geometry are not kept.
    pub polygon: Ring,
}

/// Why a feature did not produce a row.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Geometry kind is not `Polygon`. Contains the actual kind if there was one.
    NotPolygon(Option<String>),
    /// Polygon has no coordinates or no first ring.
    MissingRing,
    /// First ring is not a list of numeric positions.
    MalformedRing(String),
}

/// Result of ingesting a single feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureOutcome {
    /// The feature produced a row.
    Emitted(RenderRow),
    /// The feature was skipped.
    Skipped(SkipReason),
}

impl FeatureOutcome {
    /// Returns the row if the feature was emitted.
    pub fn into_row(self) -> Option<RenderRow> {
        match self {
            FeatureOutcome::Emitted(row) => Some(row),
            FeatureOutcome::Skipped(_) => None,
        }
    }
}

/// Ingestion rules: which properties give the height and which defaults to use.
///
/// `Ingestor::default()` reads the height from `height`, then `ele`, falling back to `30.0`,
/// and names unnamed features `"building"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestor {
    height_keys: Vec<String>,
    default_height: f64,
    default_name: String,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self {
            height_keys: HEIGHT_KEYS.iter().map(|k| k.to_string()).collect(),
            default_height: DEFAULT_HEIGHT,
            default_name: DEFAULT_NAME.to_string(),
        }
    }
}

impl Ingestor {
    /// Sets the property keys the height is read from, in priority order.
    pub fn with_height_keys(self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            height_keys: keys.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Sets the height of features without a usable height property.
    pub fn with_default_height(self, default_height: f64) -> Self {
        Self {
            default_height,
            ..self
        }
    }

    /// Sets the name of features without a `name` property.
    pub fn with_default_name(self, default_name: impl Into<String>) -> Self {
        Self {
            default_name: default_name.into(),
            ..self
        }
    }

    /// Rows of all the polygon features of the document, in document order.
    pub fn ingest(&self, document: &GeometryDocument) -> Vec<RenderRow> {
        self.outcomes(document)
            .enumerate()
            .filter_map(|(index, outcome)| {
                if let FeatureOutcome::Skipped(reason) = &outcome {
                    log::debug!("Skipped feature {index}: {reason:?}");
                }
                outcome.into_row()
            })
            .collect()
    }

    /// Outcome of every feature of the document, in document order.
    pub fn outcomes<'a>(
        &'a self,
        document: &'a GeometryDocument,
    ) -> impl Iterator<Item = FeatureOutcome> + 'a {
        document.features().iter().map(|f| self.feature_outcome(f))
    }

    /// Ingests a single feature.
    pub fn feature_outcome(&self, feature: &Value) -> FeatureOutcome {
        let geometry = feature.get("geometry");
        let kind = geometry.and_then(|g| g.get("type")).and_then(Value::as_str);
        if kind != Some("Polygon") {
            return FeatureOutcome::Skipped(SkipReason::NotPolygon(kind.map(str::to_string)));
        }

        let polygon = match outer_ring(geometry) {
            Ok(ring) => ring,
            Err(reason) => return FeatureOutcome::Skipped(reason),
        };

        let properties = feature.get("properties").and_then(Value::as_object);
        FeatureOutcome::Emitted(RenderRow {
            name: self.name(properties),
            height: self.height(properties),
            polygon,
        })
    }

    fn height(&self, properties: Option<&Map<String, Value>>) -> f64 {
        properties
            .and_then(|props| {
                self.height_keys
                    .iter()
                    .filter_map(|key| props.get(key))
                    .find_map(parse_number)
            })
            .unwrap_or(self.default_height)
    }

    fn name(&self, properties: Option<&Map<String, Value>>) -> String {
        match properties.and_then(|props| props.get("name")) {
            None | Some(Value::Null) => self.default_name.clone(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Rows of all the polygon features of the document, using the default ingestion rules.
pub fn ingest(document: &GeometryDocument) -> Vec<RenderRow> {
    Ingestor::default().ingest(document)
}

fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number.filter(|n| n.is_finite())
}

fn outer_ring(geometry: Option<&Value>) -> Result<Ring, SkipReason> {
    let ring = geometry
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
        .and_then(|rings| rings.first())
        .ok_or(SkipReason::MissingRing)?;

    let positions = ring
        .as_array()
        .ok_or_else(|| SkipReason::MalformedRing("ring is not an array".to_string()))?
        .iter()
        .map(position)
        .collect::<Option<Vec<Position>>>()
        .ok_or_else(|| SkipReason::MalformedRing("position is not an array of numbers".into()))?;

    Ring::try_from(positions).map_err(|err| SkipReason::MalformedRing(err.to_string()))
}

fn position(value: &Value) -> Option<Position> {
    value
        .as_array()?
        .iter()
        .map(|c| match c {
            Value::Number(n) => Some(n.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn document(value: Value) -> GeometryDocument {
        GeometryDocument::from_value(value).unwrap()
    }

    fn polygon_feature(properties: Value) -> Value {
        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]
            }
        })
    }

    fn height_of(properties: Value) -> f64 {
        let rows = ingest(&document(json!({ "features": [polygon_feature(properties)] })));
        assert_eq!(rows.len(), 1);
        rows[0].height
    }

    #[test]
    fn single_polygon() {
        let doc: GeometryDocument = r#"{"features":[{"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]},"properties":{"height":"50","name":"A"}}]}"#
            .parse()
            .unwrap();
        let expected: Value = serde_json::from_str(
            r#"[{"name":"A","height":50.0,"polygon":[[0,0],[1,0],[1,1],[0,0]]}]"#,
        )
        .unwrap();

        let rows = ingest(&doc);
        assert_eq!(serde_json::to_value(&rows).unwrap(), expected);
    }

    #[test]
    fn ring_coordinates_pass_through() {
        let ring = json!([[121.5, 25], [121.6, 25.0], [121.6, 25.1, 12], [121.5, 25]]);
        let doc = document(json!({
            "features": [{"geometry": {"type": "Polygon", "coordinates": [ring.clone()]}}]
        }));

        let rows = ingest(&doc);
        assert_eq!(serde_json::to_value(&rows[0].polygon).unwrap(), ring);
    }

    #[test]
    fn non_polygons_are_skipped() {
        let doc = document(json!({
            "features": [
                {"geometry": {"type": "Point", "coordinates": [121.5, 25.0]}, "properties": {}},
            ]
        }));
        assert!(ingest(&doc).is_empty());

        let outcomes: Vec<_> = Ingestor::default().outcomes(&doc).collect();
        assert_eq!(
            outcomes,
            vec![FeatureOutcome::Skipped(SkipReason::NotPolygon(Some("Point".into())))]
        );
    }

    #[test]
    fn multipolygon_and_missing_geometry_are_skipped() {
        let ingestor = Ingestor::default();
        assert_matches!(
            ingestor.feature_outcome(&json!({"geometry": {"type": "MultiPolygon", "coordinates": []}})),
            FeatureOutcome::Skipped(SkipReason::NotPolygon(Some(kind))) if kind == "MultiPolygon"
        );
        assert_matches!(
            ingestor.feature_outcome(&json!({"properties": {"height": 10}})),
            FeatureOutcome::Skipped(SkipReason::NotPolygon(None))
        );
        assert_matches!(
            ingestor.feature_outcome(&json!("not a feature")),
            FeatureOutcome::Skipped(SkipReason::NotPolygon(None))
        );
        assert_matches!(
            ingestor.feature_outcome(&json!({"geometry": {"type": "polygon"}})),
            FeatureOutcome::Skipped(SkipReason::NotPolygon(_))
        );
    }

    #[test]
    fn malformed_rings_are_skipped() {
        let ingestor = Ingestor::default();
        let outcome = |geometry: Value| ingestor.feature_outcome(&json!({ "geometry": geometry }));

        assert_eq!(
            outcome(json!({"type": "Polygon"})),
            FeatureOutcome::Skipped(SkipReason::MissingRing)
        );
        assert_eq!(
            outcome(json!({"type": "Polygon", "coordinates": []})),
            FeatureOutcome::Skipped(SkipReason::MissingRing)
        );
        assert_matches!(
            outcome(json!({"type": "Polygon", "coordinates": [[[0, "a"]]]})),
            FeatureOutcome::Skipped(SkipReason::MalformedRing(_))
        );
        assert_matches!(
            outcome(json!({"type": "Polygon", "coordinates": [[[0]]]})),
            FeatureOutcome::Skipped(SkipReason::MalformedRing(_))
        );
        assert_matches!(
            outcome(json!({"type": "Polygon", "coordinates": [5]})),
            FeatureOutcome::Skipped(SkipReason::MalformedRing(_))
        );
    }

    #[test]
    fn height_sources() {
        assert_eq!(height_of(json!({"height": "12.5"})), 12.5);
        assert_eq!(height_of(json!({"height": 42})), 42.0);
        assert_eq!(height_of(json!({"height": " 7 "})), 7.0);
        assert_eq!(height_of(json!({"ele": 88.5})), 88.5);
        assert_eq!(height_of(json!({"height": 10, "ele": 20})), 10.0);
    }

    #[test]
    fn unparsable_height_falls_through() {
        assert_eq!(height_of(json!({"height": "tall", "ele": "15"})), 15.0);
        assert_eq!(height_of(json!({"height": null, "ele": 3})), 3.0);
        assert_eq!(height_of(json!({"height": "tall", "ele": [1]})), DEFAULT_HEIGHT);
        assert_eq!(height_of(json!({"height": "NaN"})), DEFAULT_HEIGHT);
        assert_eq!(height_of(json!({"floors": 20})), DEFAULT_HEIGHT);
        assert_eq!(height_of(json!({})), DEFAULT_HEIGHT);
    }

    #[test]
    fn missing_properties() {
        assert_eq!(height_of(Value::Null), DEFAULT_HEIGHT);
        assert_eq!(height_of(json!("junk")), DEFAULT_HEIGHT);

        let rows = ingest(&document(json!({ "features": [polygon_feature(Value::Null)] })));
        assert_eq!(rows[0].name, DEFAULT_NAME);
    }

    #[test]
    fn names() {
        let name_of = |properties: Value| {
            ingest(&document(json!({ "features": [polygon_feature(properties)] })))[0]
                .name
                .clone()
        };

        assert_eq!(name_of(json!({"name": "Taipei 101"})), "Taipei 101");
        assert_eq!(name_of(json!({"name": null})), "building");
        assert_eq!(name_of(json!({})), "building");
        assert_eq!(name_of(json!({"name": 7})), "7");
    }

    #[test]
    fn only_outer_ring_is_kept() {
        let doc = document(json!({
            "features": [{
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
                        [[1, 1], [2, 1], [2, 2], [1, 1]]
                    ]
                }
            }]
        }));

        let rows = ingest(&doc);
        assert_eq!(rows[0].polygon.len(), 5);
        assert_eq!(
            serde_json::to_value(&rows[0].polygon).unwrap(),
            json!([[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]])
        );
    }

    #[test]
    fn order_preserved_and_never_longer_than_input() {
        let doc = document(json!({
            "features": [
                polygon_feature(json!({"name": "first"})),
                {"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
                polygon_feature(json!({"name": "second"})),
                {"geometry": {"type": "Polygon"}},
                polygon_feature(json!({"name": "third"})),
            ]
        }));

        let rows = ingest(&doc);
        assert!(rows.len() <= doc.features().len());
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn missing_features() {
        assert!(ingest(&document(json!({}))).is_empty());
        assert!(ingest(&document(json!({"features": null}))).is_empty());
    }

    #[test]
    fn demo_buildings() {
        let rows = ingest(&GeometryDocument::demo_buildings());
        let summary: Vec<_> = rows.iter().map(|r| (r.name.as_str(), r.height)).collect();
        assert_eq!(summary, [("Demo Tower A", 180.0), ("Demo Tower B", 120.0)]);
        assert!(rows.iter().all(|r| r.polygon.is_closed()));
    }

    #[test]
    fn custom_rules() {
        let ingestor = Ingestor::default()
            .with_height_keys(["levels", "height"])
            .with_default_height(3.0)
            .with_default_name("unnamed");

        let doc = document(json!({
            "features": [
                polygon_feature(json!({"levels": "12", "height": 99})),
                polygon_feature(json!({"ele": 50})),
            ]
        }));

        let rows = ingestor.ingest(&doc);
        assert_eq!(rows[0].height, 12.0);
        assert_eq!(rows[1].height, 3.0);
        assert_eq!(rows[1].name, "unnamed");
    }
}
