use std::collections::BTreeMap;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use taipei_gis_types::{BoundingRect, GeoPoint2d};

use crate::document::GeometryDocument;
use crate::error::GisError;

/// Named layer showing a GeoJSON document as it is, e.g. transit lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonLayer {
    name: String,
    collection: FeatureCollection,
}

impl GeoJsonLayer {
    /// Creates a layer from a feature collection.
    pub fn new(name: impl Into<String>, collection: FeatureCollection) -> Self {
        Self {
            name: name.into(),
            collection,
        }
    }

    /// Reads a strict GeoJSON document. A single feature or geometry becomes a collection of
    /// one feature.
    pub fn from_document(
        name: impl Into<String>,
        document: GeometryDocument,
    ) -> Result<Self, GisError> {
        let collection = match GeoJson::from_json_value(document.into_value())? {
            GeoJson::FeatureCollection(collection) => collection,
            GeoJson::Feature(feature) => single_feature(feature),
            GeoJson::Geometry(geometry) => single_feature(Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: None,
                foreign_members: None,
            }),
        };

        Ok(Self::new(name, collection))
    }

    /// Display name of the layer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Features of the layer.
    pub fn features(&self) -> &[Feature] {
        &self.collection.features
    }

    /// Number of features per geometry kind. Features without geometry are counted as `None`.
    pub fn geometry_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for feature in &self.collection.features {
            let kind = feature
                .geometry
                .as_ref()
                .map_or("None", |geometry| kind_name(&geometry.value));
            *counts.entry(kind).or_default() += 1;
        }

        counts
    }

    /// Extent of all the geometries, or `None` if the layer has no coordinates.
    pub fn extent(&self) -> Option<BoundingRect> {
        let mut points = Vec::new();
        for geometry in self.collection.features.iter().filter_map(|f| f.geometry.as_ref()) {
            collect_points(geometry, &mut points);
        }

        BoundingRect::from_points(points.iter())
    }
}

fn single_feature(feature: Feature) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn collect_points(geometry: &Geometry, points: &mut Vec<GeoPoint2d>) {
    match &geometry.value {
        Value::Point(p) => push_positions(std::slice::from_ref(p), points),
        Value::MultiPoint(ps) | Value::LineString(ps) => push_positions(ps, points),
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            for line in lines {
                push_positions(line, points);
            }
        }
        Value::MultiPolygon(polygons) => {
            for line in polygons.iter().flatten() {
                push_positions(line, points);
            }
        }
        Value::GeometryCollection(geometries) => {
            for inner in geometries {
                collect_points(inner, points);
            }
        }
    }
}

fn push_positions(positions: &[Vec<f64>], points: &mut Vec<GeoPoint2d>) {
    points.extend(
        positions
            .iter()
            .filter_map(|p| GeoPoint2d::try_from(&p[..]).ok()),
    );
}
