//! Map camera: the [`MapView`] a page opens with.

use serde::{Deserialize, Serialize};
use taipei_gis_types::GeoPoint2d;

use crate::error::GisError;

/// Highest zoom level accepted by [`MapView`].
pub const MAX_ZOOM: f64 = 24.0;
/// Highest camera pitch, in degrees, accepted by [`MapView`].
pub const MAX_PITCH: f64 = 85.0;

/// Camera anchor of a map: where it looks, how close and from which angle.
///
/// Serializes into the deck.gl `initialViewState` object.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    latitude: f64,
    longitude: f64,
    zoom: f64,
    pitch: f64,
    bearing: f64,
}

impl MapView {
    /// Creates a top-down view centered at `center`.
    ///
    /// Fails if the point is not a valid geographic position or the zoom is out of `0..=24`.
    pub fn new(center: GeoPoint2d, zoom: f64) -> Result<Self, GisError> {
        if !center.is_valid() {
            return Err(GisError::Config(format!("invalid view center {center:?}")));
        }

        Self {
            latitude: center.lat(),
            longitude: center.lon(),
            ..Default::default()
        }
        .with_zoom(zoom)
    }

    /// View from known-good camera values, used for the fixed page cameras.
    pub(crate) const fn from_camera(
        latitude: f64,
        longitude: f64,
        zoom: f64,
        pitch: f64,
        bearing: f64,
    ) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
            pitch,
            bearing,
        }
    }

    /// Center of the view.
    pub fn center(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.latitude, self.longitude)
    }

    /// Zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Camera tilt from the vertical, in degrees.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Camera rotation clockwise from north, in degrees.
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Returns a copy of the view with the given zoom level.
    pub fn with_zoom(&self, zoom: f64) -> Result<Self, GisError> {
        if !zoom.is_finite() || !(0.0..=MAX_ZOOM).contains(&zoom) {
            return Err(GisError::Config(format!(
                "zoom must be within 0..={MAX_ZOOM}, got {zoom}"
            )));
        }

        Ok(Self { zoom, ..*self })
    }

    /// Returns a copy of the view with the given camera pitch.
    pub fn with_pitch(&self, pitch: f64) -> Result<Self, GisError> {
        if !pitch.is_finite() || !(0.0..=MAX_PITCH).contains(&pitch) {
            return Err(GisError::Config(format!(
                "pitch must be within 0..={MAX_PITCH}, got {pitch}"
            )));
        }

        Ok(Self { pitch, ..*self })
    }

    /// Returns a copy of the view with the given bearing. Bearing is normalized to `[0, 360)`.
    pub fn with_bearing(&self, bearing: f64) -> Result<Self, GisError> {
        if !bearing.is_finite() {
            return Err(GisError::Config(format!("bearing must be finite, got {bearing}")));
        }

        Ok(Self {
            bearing: bearing.rem_euclid(360.0),
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use serde_json::json;
    use taipei_gis_types::latlon;

    #[test]
    fn builds_view() {
        let view = MapView::new(latlon!(25.033968, 121.564468), 15.0)
            .and_then(|v| v.with_pitch(60.0))
            .and_then(|v| v.with_bearing(20.0))
            .unwrap();

        assert_eq!(view.center(), latlon!(25.033968, 121.564468));
        assert_eq!(view.zoom(), 15.0);
        assert_eq!(view.pitch(), 60.0);
        assert_eq!(view.bearing(), 20.0);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_matches!(
            MapView::new(latlon!(95.0, 0.0), 1.0),
            Err(GisError::Config(_))
        );
        assert_matches!(MapView::default().with_zoom(25.0), Err(GisError::Config(_)));
        assert_matches!(MapView::default().with_zoom(f64::NAN), Err(_));
        assert_matches!(MapView::default().with_pitch(-1.0), Err(_));
        assert_matches!(MapView::default().with_pitch(90.0), Err(_));
        assert_matches!(MapView::default().with_bearing(f64::INFINITY), Err(_));
    }

    #[test]
    fn bearing_is_normalized() {
        let view = MapView::default();
        assert_abs_diff_eq!(view.with_bearing(380.0).unwrap().bearing(), 20.0);
        assert_abs_diff_eq!(view.with_bearing(-90.0).unwrap().bearing(), 270.0);
        assert_abs_diff_eq!(view.with_bearing(360.0).unwrap().bearing(), 0.0);
    }

    #[test]
    fn serializes_as_initial_view_state() {
        let view = MapView::new(latlon!(25.0, 121.5), 12.0).unwrap();
        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({
                "latitude": 25.0,
                "longitude": 121.5,
                "zoom": 12.0,
                "pitch": 0.0,
                "bearing": 0.0,
            })
        );
    }
}
