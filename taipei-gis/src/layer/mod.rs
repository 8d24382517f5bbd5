//! [Layers](Layer) describe what a map draws on top of each other.
//!
//! Layers here are plain descriptors: they carry the data and the styling, and the renderer
//! of the hosting page decides how to draw them.

use std::ops::Index;

use crate::basemap::Basemap;

mod geojson_layer;
mod polygon_layer;

pub use geojson_layer::GeoJsonLayer;
pub use polygon_layer::{ExtrusionSymbol, PolygonLayer};

/// A single map layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Raster tile basemap.
    Basemap(Basemap),
    /// GeoJSON features drawn as they are.
    GeoJson(GeoJsonLayer),
    /// Extruded polygons.
    Polygon(PolygonLayer),
}

impl Layer {
    /// Identifier of the layer: the provider name for basemaps, the layer name or id otherwise.
    pub fn id(&self) -> &str {
        match self {
            Layer::Basemap(basemap) => basemap.name(),
            Layer::GeoJson(layer) => layer.name(),
            Layer::Polygon(layer) => layer.id(),
        }
    }
}

impl From<Basemap> for Layer {
    fn from(value: Basemap) -> Self {
        Layer::Basemap(value)
    }
}

impl From<GeoJsonLayer> for Layer {
    fn from(value: GeoJsonLayer) -> Self {
        Layer::GeoJson(value)
    }
}

impl From<PolygonLayer> for Layer {
    fn from(value: PolygonLayer) -> Self {
        Layer::Polygon(value)
    }
}

/// Ordered collection of layers. Layers are drawn in the order they are stored, so the first
/// layer is at the bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerCollection(Vec<Layer>);

impl LayerCollection {
    /// Adds a layer on top of the others.
    pub fn push(&mut self, layer: impl Into<Layer>) {
        self.0.push(layer.into());
    }

    /// Removes all layers from the collection.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the layers from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.0.iter()
    }

    /// Returns the topmost layer with the given id.
    pub fn get_by_id(&self, id: &str) -> Option<&Layer> {
        self.0.iter().rev().find(|layer| layer.id() == id)
    }
}

impl Index<usize> for LayerCollection {
    type Output = Layer;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<L: Into<Layer>> FromIterator<L> for LayerCollection {
    fn from_iter<T: IntoIterator<Item = L>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
