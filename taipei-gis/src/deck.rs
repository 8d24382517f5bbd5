use serde::Serialize;

use crate::error::GisError;
use crate::layer::PolygonLayer;
use crate::view::MapView;

/// Declarative deck.gl scene: initial camera and the layers, in the form the deck.gl JSON
/// converter accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckSpec {
    #[serde(rename = "initialViewState")]
    initial_view_state: MapView,
    layers: Vec<PolygonLayer>,
}

impl DeckSpec {
    /// Creates a scene without layers.
    pub fn new(initial_view_state: MapView) -> Self {
        Self {
            initial_view_state,
            layers: Vec::new(),
        }
    }

    /// Returns the scene with the layer added on top.
    pub fn with_layer(mut self, layer: PolygonLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// The scene as pretty-printed JSON text.
    pub fn to_json_string_pretty(&self) -> Result<String, GisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
