use serde::Serialize;

use crate::ingest::RenderRow;
use crate::Color;

/// Appearance of extruded polygons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtrusionSymbol {
    /// Color of the polygon faces.
    #[serde(rename = "getFillColor")]
    pub fill_color: Color,
    /// Color of the outlines and, for wireframe rendering, of the edges.
    #[serde(rename = "getLineColor")]
    pub line_color: Color,
    /// Layer opacity, `0.0..=1.0`.
    pub opacity: f64,
    /// Polygons are raised to their height when true, drawn flat otherwise.
    pub extruded: bool,
    /// Draw the edges of extruded polygons.
    pub wireframe: bool,
    /// Polygons react to hovering and clicking.
    pub pickable: bool,
}

impl ExtrusionSymbol {
    /// Styling of the buildings layer.
    pub const BUILDINGS: ExtrusionSymbol = ExtrusionSymbol {
        fill_color: Color::rgb(180, 180, 200),
        line_color: Color::rgb(60, 60, 80),
        opacity: 0.8,
        extruded: true,
        wireframe: true,
        pickable: true,
    };
}

/// Descriptor of a deck.gl `PolygonLayer` drawing [`RenderRow`]s.
///
/// Rows are referenced by accessor names: the ring is read from `polygon` and the extrusion
/// height from `height`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonLayer {
    #[serde(rename = "@@type")]
    layer_type: &'static str,
    id: String,
    data: Vec<RenderRow>,
    #[serde(rename = "getPolygon")]
    get_polygon: &'static str,
    #[serde(rename = "getElevation")]
    get_elevation: &'static str,
    #[serde(flatten)]
    symbol: ExtrusionSymbol,
}

impl PolygonLayer {
    /// Creates a new layer.
    pub fn new(id: impl Into<String>, data: Vec<RenderRow>, symbol: ExtrusionSymbol) -> Self {
        Self {
            layer_type: "PolygonLayer",
            id: id.into(),
            data,
            get_polygon: "polygon",
            get_elevation: "height",
            symbol,
        }
    }

    /// Layer id.
    pub fn id(&self) -> &str {
        &self.id
    }
}
