//! 3D map of extruded buildings over a light basemap.

use crate::basemap::Basemap;
use crate::deck::DeckSpec;
use crate::ingest::Ingestor;
use crate::layer::{ExtrusionSymbol, PolygonLayer};
use crate::provider::DocumentProvider;
use crate::refresh::{load_from_builtin, load_from_remote, ViewPhase, ViewState};
use crate::view::MapView;

/// Id of the buildings layer in the deck spec.
pub const BUILDINGS_LAYER_ID: &str = "taipei-buildings";

/// Initial camera of the 3D map, looking at Xinyi from the south-west.
pub const BUILDINGS_VIEW: MapView = MapView::from_camera(25.033968, 121.564468, 15.0, 60.0, 20.0);

/// State of the buildings page: the displayed rows and the URL input.
#[derive(Debug, Default)]
pub struct BuildingsPage {
    state: ViewState,
    url: String,
}

impl BuildingsPage {
    /// Creates the page showing the demo buildings, with an empty URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the page showing the demo buildings, ingesting documents with the given rules.
    pub fn with_ingestor(ingestor: Ingestor) -> Self {
        Self {
            state: ViewState::with_ingestor(ingestor),
            url: String::new(),
        }
    }

    /// Basemap under the buildings.
    pub fn basemap(&self) -> Basemap {
        Basemap::CartoDbPositron
    }

    /// Rows, status and phase on display.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mutable access to the view state, e.g. to subscribe to updates.
    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Status message of the last load.
    pub fn status(&self) -> &str {
        self.state.status()
    }

    /// URL used by the next remote load.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Changes the URL used by the next remote load.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Shows the demo buildings again.
    pub fn load_builtin(&mut self) -> ViewPhase {
        load_from_builtin(&mut self.state)
    }

    /// Loads buildings from the current URL, falling back to the demo buildings on failure.
    pub async fn load_from_url<P>(&mut self, provider: &P) -> ViewPhase
    where
        P: DocumentProvider + ?Sized,
    {
        load_from_remote(&mut self.state, provider, &self.url).await
    }

    /// Scene with the displayed rows as one extruded polygon layer.
    pub fn deck_spec(&self) -> DeckSpec {
        DeckSpec::new(BUILDINGS_VIEW).with_layer(PolygonLayer::new(
            BUILDINGS_LAYER_ID,
            self.state.rows().to_vec(),
            ExtrusionSymbol::BUILDINGS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GisError;
    use crate::refresh::{BUILTIN_LOADED_STATUS, REMOTE_LOADED_STATUS};
    use crate::tests::FakeProvider;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn opens_with_demo_buildings() {
        let page = BuildingsPage::new();
        assert_eq!(page.state().phase(), ViewPhase::Default);
        assert_eq!(page.status(), BUILTIN_LOADED_STATUS);
        assert_eq!(page.state().rows().len(), 2);
        assert_eq!(page.url(), "");
        assert_eq!(page.basemap(), Basemap::CartoDbPositron);
    }

    #[test]
    fn loads_from_current_url() {
        let mut page = BuildingsPage::new();
        let provider = FakeProvider::document(json!({
            "features": [{
                "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]},
                "properties": {"height": 12}
            }]
        }));
        page.set_url("https://example.com/buildings.geojson");

        let phase = tokio_test::block_on(page.load_from_url(&provider));

        assert_eq!(phase, ViewPhase::Loaded);
        assert_eq!(page.status(), REMOTE_LOADED_STATUS);
        assert_eq!(page.state().rows()[0].name, "building");
        assert_eq!(provider.requested(), ["https://example.com/buildings.geojson"]);
    }

    #[test]
    fn empty_url_reverts_to_demo() {
        let mut page = BuildingsPage::new();
        let provider = FakeProvider::document(json!({"features": []}));

        let phase = tokio_test::block_on(page.load_from_url(&provider));

        assert_eq!(phase, ViewPhase::ErrorResetToDefault);
        assert!(page.status().contains(&GisError::EmptyUrl.to_string()));
        assert_eq!(page.state().rows().len(), 2);
        assert!(provider.requested().is_empty());
        assert_eq!(page.load_builtin(), ViewPhase::Default);
    }

    #[test]
    fn ingestion_rules_apply_to_remote_documents() {
        let mut page = BuildingsPage::with_ingestor(
            Ingestor::default()
                .with_height_keys(["levels"])
                .with_default_height(4.0),
        );
        assert!(page.state().rows().iter().all(|row| row.height == 4.0));

        let provider = FakeProvider::document(json!({
            "features": [{
                "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]},
                "properties": {"levels": "9", "height": 300}
            }]
        }));
        page.set_url("https://example.com/buildings.geojson");
        tokio_test::block_on(page.load_from_url(&provider));

        assert_eq!(page.state().rows()[0].height, 9.0);
    }

    #[test]
    fn observers_follow_loads() {
        let mut page = BuildingsPage::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        page.state_mut()
            .subscribe(move |state: &ViewState| sink.lock().unwrap().push(state.phase()));

        tokio_test::block_on(page.load_from_url(&FakeProvider::document(json!({}))));
        page.load_builtin();

        assert_eq!(
            *seen.lock().unwrap(),
            [ViewPhase::ErrorResetToDefault, ViewPhase::Default]
        );
    }

    #[test]
    fn deck_spec_shape() {
        let page = BuildingsPage::new();
        let value = serde_json::to_value(page.deck_spec()).unwrap();

        assert_eq!(
            value["initialViewState"],
            json!({"latitude": 25.033968, "longitude": 121.564468, "zoom": 15.0, "pitch": 60.0, "bearing": 20.0})
        );

        let layer = &value["layers"][0];
        assert_eq!(layer["@@type"], "PolygonLayer");
        assert_eq!(layer["id"], BUILDINGS_LAYER_ID);
        assert_eq!(layer["getPolygon"], "polygon");
        assert_eq!(layer["getElevation"], "height");
        assert_eq!(layer["extruded"], true);
        assert_eq!(layer["wireframe"], true);
        assert_eq!(layer["pickable"], true);
        assert_eq!(layer["opacity"], 0.8);
        assert_eq!(layer["getFillColor"], json!([180, 180, 200]));
        assert_eq!(layer["getLineColor"], json!([60, 60, 80]));
        assert_eq!(layer["data"].as_array().unwrap().len(), 2);
        assert_eq!(layer["data"][0]["name"], "Demo Tower A");
        assert_eq!(layer["data"][0]["height"], 180.0);
    }
}
