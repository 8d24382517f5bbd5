//! 2D map of the Taipei MRT network over a dark basemap.

use crate::basemap::Basemap;
use crate::error::GisError;
use crate::layer::{GeoJsonLayer, Layer, LayerCollection};
use crate::provider::DocumentProvider;
use crate::view::MapView;

/// Document loaded when the page opens.
pub const DEFAULT_TRANSIT_URL: &str =
    "https://raw.githubusercontent.com/leoluyi/taipei_mrt/master/data/taipei_mrt.geojson";
/// Name of the transit layer.
pub const TRANSIT_LAYER_NAME: &str = "Taipei MRT";
/// Status after a successful load.
pub const TRANSIT_LOADED_STATUS: &str = "Loaded MRT layer";

/// Camera of the page when it opens.
pub const TRANSIT_VIEW: MapView = MapView::from_camera(25.0418, 121.5360, 12.0, 0.0, 0.0);

/// State of the transit page.
#[derive(Debug, Clone)]
pub struct TransitMap {
    view: MapView,
    basemap: Basemap,
    layers: LayerCollection,
    url: String,
    status: String,
}

impl Default for TransitMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitMap {
    /// Creates the page centered on Taipei with only the basemap shown. Nothing is loaded yet.
    pub fn new() -> Self {
        let mut layers = LayerCollection::default();
        layers.push(Basemap::CartoDbDarkMatter);

        Self {
            view: TRANSIT_VIEW,
            basemap: Basemap::CartoDbDarkMatter,
            layers,
            url: DEFAULT_TRANSIT_URL.to_string(),
            status: String::new(),
        }
    }

    /// Creates the page with a different basemap under the transit layer.
    pub fn with_basemap(self, basemap: Basemap) -> Self {
        let mut layers = LayerCollection::default();
        layers.push(basemap);

        Self {
            basemap,
            layers,
            ..self
        }
    }

    /// Camera of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Basemap under the transit layer.
    pub fn basemap(&self) -> Basemap {
        self.basemap
    }

    /// Layers on the map, basemap first.
    pub fn layers(&self) -> &LayerCollection {
        &self.layers
    }

    /// URL used by the next load.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Status message of the last load, empty before the first one.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Changes the URL used by the next load.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Rebuilds the layers from the document at the current URL.
    ///
    /// The basemap is always kept. On failure it is the only layer left and the error is
    /// reported through the status.
    pub async fn load_layer<P>(&mut self, provider: &P)
    where
        P: DocumentProvider + ?Sized,
    {
        self.layers.clear();
        self.layers.push(self.basemap);

        match self.fetch_layer(provider).await {
            Ok(layer) => {
                log::info!(
                    "Loaded {} transit features from {}",
                    layer.features().len(),
                    self.url
                );
                self.layers.push(layer);
                self.status = TRANSIT_LOADED_STATUS.to_string();
            }
            Err(error) => {
                log::warn!("Failed to load transit layer from '{}': {error}", self.url);
                self.status = format!("Load failed: {error}");
            }
        }
    }

    /// The transit layer, if the last load succeeded.
    pub fn transit_layer(&self) -> Option<&GeoJsonLayer> {
        match self.layers.get_by_id(TRANSIT_LAYER_NAME) {
            Some(Layer::GeoJson(layer)) => Some(layer),
            _ => None,
        }
    }

    async fn fetch_layer<P>(&self, provider: &P) -> Result<GeoJsonLayer, GisError>
    where
        P: DocumentProvider + ?Sized,
    {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(GisError::EmptyUrl);
        }

        let document = provider.load(url).await?;
        GeoJsonLayer::from_document(TRANSIT_LAYER_NAME, document)
    }
}
