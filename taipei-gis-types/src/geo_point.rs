use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::GisTypesError;

/// 2d point on the surface of the Earth, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a point from latitude and longitude values.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns true if the point lies within the valid latitude and longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Converts a GeoJSON position (`[lon, lat, ...]`). Coordinates after the second are ignored.
impl TryFrom<&[f64]> for GeoPoint2d {
    type Error = GisTypesError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [lon, lat, ..] => Ok(Self::latlon(*lat, *lon)),
            _ => Err(GisTypesError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            )),
        }
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new [`GeoPoint2d`] from latitude and longitude values (in degrees).
///
/// ```
/// use taipei_gis_types::latlon;
///
/// let taipei_101 = latlon!(25.033968, 121.564468);
/// assert_eq!(taipei_101.lat(), 25.033968);
/// assert_eq!(taipei_101.lon(), 121.564468);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::GeoPoint2d::latlon($lat, $lon)
    };
}
