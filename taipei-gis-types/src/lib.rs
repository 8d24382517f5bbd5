//! Geometry primitives shared by the Taipei GIS dashboard crates.
//!
//! Geographic coordinates follow the GeoJSON convention: a position is `[longitude, latitude, ...]`
//! with values in degrees. [`GeoPoint2d`] gives the same data named accessors, [`Ring`] is the
//! outer boundary of a polygon and [`BoundingRect`] is its geographic extent.

pub mod bounding_rect;
pub mod error;
mod geo_point;
mod ring;

pub use bounding_rect::BoundingRect;
pub use geo_point::GeoPoint2d;
pub use ring::{Position, Ring};
