//! Core of the Taipei GIS dashboard: turning GeoJSON-like documents into rows an extrusion
//! layer can draw, and keeping the displayed rows in sync with a remote source.
//!
//! # Ingestion
//!
//! [`ingest`](ingest::ingest) reads the features of a [`GeometryDocument`] and produces one
//! [`RenderRow`] per polygon: its name, its height and the outer ring. Features that are not
//! polygons, or whose ring cannot be read, are skipped. Ingestion never fails as a whole.
//!
//! ```no_run
//! use taipei_gis::{ingest::ingest, GeometryDocument};
//!
//! let rows = ingest(&GeometryDocument::demo_buildings());
//! assert_eq!(rows.len(), 2);
//! ```
//!
//! # Refresh
//!
//! A [`ViewState`] holds the rows on display together with a status line. It starts with the
//! built-in demo buildings. [`load_from_remote`](refresh::load_from_remote) fetches a document
//! through a [`DocumentProvider`], by default the HTTP [`UrlDocumentProvider`] with a 10 second
//! timeout. If anything goes wrong the view shows the demo buildings again and the status
//! explains what happened.
//!
//! # Pages
//!
//! The [`pages`] module models the dashboard pages: the home counter, the 2D transit map and
//! the 3D buildings map, which produces a deck.gl [`DeckSpec`].

pub mod basemap;
mod color;
mod deck;
pub mod document;
pub mod error;
pub mod ingest;
pub mod layer;
pub mod pages;
pub mod provider;
pub mod reactive;
pub mod refresh;
pub mod view;

#[cfg(test)]
mod tests;

pub use basemap::Basemap;
pub use color::Color;
pub use deck::DeckSpec;
pub use document::GeometryDocument;
pub use error::GisError;
pub use ingest::{Ingestor, RenderRow};
pub use provider::{DocumentProvider, UrlDocumentProvider};
pub use refresh::{ViewPhase, ViewState};
pub use view::MapView;

pub use taipei_gis_types;
