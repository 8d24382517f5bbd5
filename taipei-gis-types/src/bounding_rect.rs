//! Geographic extent of a set of points.

use serde::{Deserialize, Serialize};

use crate::GeoPoint2d;

/// Axis-aligned rectangle in longitude/latitude degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    /// Western edge.
    pub lon_min: f64,
    /// Southern edge.
    pub lat_min: f64,
    /// Eastern edge.
    pub lon_max: f64,
    /// Northern edge.
    pub lat_max: f64,
}

impl BoundingRect {
    /// Creates a new rectangle.
    pub fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        }
    }

    /// Rectangle of zero size at the given point.
    pub fn from_point(p: &GeoPoint2d) -> Self {
        Self::new(p.lon(), p.lat(), p.lon(), p.lat())
    }

    /// Smallest rectangle containing all the points, or `None` if the iterator is empty.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a GeoPoint2d>) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }

    /// Smallest rectangle containing all the given rectangles, or `None` if there are none.
    pub fn merge_all(rects: impl IntoIterator<Item = BoundingRect>) -> Option<Self> {
        rects.into_iter().reduce(|acc, rect| acc.merge(rect))
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }
}
