use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::GisTypesError;
use crate::{BoundingRect, GeoPoint2d};

/// GeoJSON position: `[lon, lat]` with optional extra coordinates, kept as the JSON numbers
/// they were read from.
pub type Position = Vec<Number>;

/// Outer boundary of a polygon, as a sequence of GeoJSON positions.
///
/// The positions are stored exactly as received, so `[0, 0]` serializes back as `[0, 0]` and
/// not `[0.0, 0.0]`. The ring is not required to be closed, and extra coordinates (e.g.
/// elevation) are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Ring {
    positions: Vec<Position>,
}

impl Ring {
    /// Positions of the ring.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions in the ring.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the ring has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if the last position repeats the first one.
    pub fn is_closed(&self) -> bool {
        match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) => self.positions.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Iterates over the positions as geographic points.
    pub fn points(&self) -> impl Iterator<Item = GeoPoint2d> + '_ {
        self.positions.iter().filter_map(|p| {
            Some(GeoPoint2d::latlon(
                p.get(1)?.as_f64()?,
                p.first()?.as_f64()?,
            ))
        })
    }

    /// Extent of the ring, or `None` for an empty ring.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        let points: Vec<GeoPoint2d> = self.points().collect();
        BoundingRect::from_points(points.iter())
    }
}

impl TryFrom<Vec<Position>> for Ring {
    type Error = GisTypesError;

    fn try_from(positions: Vec<Position>) -> Result<Self, Self::Error> {
        if let Some(index) = positions
            .iter()
            .position(|p| p.len() < 2 || p.iter().any(|c| c.as_f64().is_none()))
        {
            return Err(GisTypesError::Conversion(format!(
                "ring position {index} is not a valid [lon, lat] pair"
            )));
        }

        Ok(Self { positions })
    }
}

impl From<Ring> for Vec<Position> {
    fn from(ring: Ring) -> Self {
        ring.positions
    }
}
