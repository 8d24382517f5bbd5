//! Refresh-on-demand workflow for the displayed building rows.
//!
//! [`ViewState`] owns the rows currently on screen and the status line shown next to the map.
//! [`load_from_builtin`] and [`load_from_remote`] are the only ways to change them. Each call
//! computes the complete new rows first and then replaces rows, status and phase together, so
//! an observer never sees a half-applied update.
//!
//! A failed remote load does not keep the last good rows: it always resets the view to the
//! built-in demo buildings.

use taipei_gis_types::BoundingRect;

use crate::document::GeometryDocument;
use crate::error::GisError;
use crate::ingest::{Ingestor, RenderRow};
use crate::provider::DocumentProvider;
use crate::reactive::{Observers, SubscriptionId};

/// Status after the built-in buildings are loaded.
pub const BUILTIN_LOADED_STATUS: &str = "Loaded demo buildings (available offline)";
/// Status after a successful remote load.
pub const REMOTE_LOADED_STATUS: &str = "Loaded 3D buildings from URL";

/// Where the displayed rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Built-in demo buildings, loaded on purpose.
    Default,
    /// The last remote load succeeded.
    Loaded,
    /// The last remote load failed and the demo buildings were restored.
    ErrorResetToDefault,
}

/// Rows on display plus the status line.
#[derive(Debug)]
pub struct ViewState {
    rows: Vec<RenderRow>,
    status: String,
    phase: ViewPhase,
    ingestor: Ingestor,
    observers: Observers<ViewState>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates the state showing the built-in demo buildings.
    pub fn new() -> Self {
        Self::with_ingestor(Ingestor::default())
    }

    /// Creates the state showing the built-in demo buildings, ingesting documents with the
    /// given rules.
    pub fn with_ingestor(ingestor: Ingestor) -> Self {
        let mut state = Self {
            rows: Vec::new(),
            status: String::new(),
            phase: ViewPhase::Default,
            ingestor,
            observers: Observers::default(),
        };
        load_from_builtin(&mut state);
        state
    }

    /// Rows on display.
    pub fn rows(&self) -> &[RenderRow] {
        &self.rows
    }

    /// Status message of the last load.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Source of the rows on display.
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Extent of all displayed polygons, or `None` if nothing is displayed.
    pub fn extent(&self) -> Option<BoundingRect> {
        BoundingRect::merge_all(self.rows.iter().filter_map(|row| row.polygon.bounding_rect()))
    }

    /// Registers an observer called after every load, with the state already updated.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&ViewState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Removes an observer. Returns false if there was no observer with this id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn builtin_rows(&self) -> Vec<RenderRow> {
        self.ingestor.ingest(&GeometryDocument::demo_buildings())
    }

    fn replace(&mut self, rows: Vec<RenderRow>, status: String, phase: ViewPhase) {
        self.rows = rows;
        self.status = status;
        self.phase = phase;
        self.observers.notify(self);
    }
}

/// Shows the built-in demo buildings. Always succeeds.
pub fn load_from_builtin(state: &mut ViewState) -> ViewPhase {
    let rows = state.builtin_rows();
    state.replace(rows, BUILTIN_LOADED_STATUS.to_string(), ViewPhase::Default);
    ViewPhase::Default
}

/// Loads the document at `url` and shows its buildings.
///
/// On any failure the demo buildings are shown instead and the status describes the error.
/// An empty url is a failure and is never passed to the provider. The error is not returned:
/// the status line is the only report.
pub async fn load_from_remote<P>(state: &mut ViewState, provider: &P, url: &str) -> ViewPhase
where
    P: DocumentProvider + ?Sized,
{
    let url = url.trim();
    let loaded = if url.is_empty() {
        Err(GisError::EmptyUrl)
    } else {
        provider.load(url).await
    };

    match loaded {
        Ok(document) => {
            let rows = state.ingestor.ingest(&document);
            log::info!(
                "Loaded {} buildings from {} features at {url}",
                rows.len(),
                document.features().len()
            );
            state.replace(rows, REMOTE_LOADED_STATUS.to_string(), ViewPhase::Loaded);
            ViewPhase::Loaded
        }
        Err(error) => {
            log::warn!("Failed to load buildings from '{url}': {error}");
            let rows = state.builtin_rows();
            state.replace(rows, failure_status(&error), ViewPhase::ErrorResetToDefault);
            ViewPhase::ErrorResetToDefault
        }
    }
}

/// Status shown after a failed remote load.
pub fn failure_status(error: &GisError) -> String {
    format!("Load failed, reverted to demo buildings: {error}")
}
