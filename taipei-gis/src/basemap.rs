//! Raster basemaps the dashboard pages draw their layers on.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GisError;

/// Credit line a basemap must display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribution {
    /// Attribution text.
    pub text: &'static str,
    /// Page with the full attribution terms.
    pub url: Option<&'static str>,
}

/// Known raster tile basemaps, named the way leaflet-providers names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basemap {
    /// Dark CARTO basemap, used under the transit lines.
    CartoDbDarkMatter,
    /// Light CARTO basemap, used under the extruded buildings.
    CartoDbPositron,
    /// Standard OpenStreetMap tiles.
    OpenStreetMapMapnik,
}

impl Basemap {
    /// All known basemaps.
    pub const ALL: [Basemap; 3] = [
        Basemap::CartoDbDarkMatter,
        Basemap::CartoDbPositron,
        Basemap::OpenStreetMapMapnik,
    ];

    /// Provider name, e.g. `CartoDB.DarkMatter`.
    pub fn name(&self) -> &'static str {
        match self {
            Basemap::CartoDbDarkMatter => "CartoDB.DarkMatter",
            Basemap::CartoDbPositron => "CartoDB.Positron",
            Basemap::OpenStreetMapMapnik => "OpenStreetMap.Mapnik",
        }
    }

    /// Attribution that must be shown with the basemap.
    pub fn attribution(&self) -> Attribution {
        match self {
            Basemap::CartoDbDarkMatter | Basemap::CartoDbPositron => Attribution {
                text: "© OpenStreetMap contributors © CARTO",
                url: Some("https://carto.com/attributions"),
            },
            Basemap::OpenStreetMapMapnik => Attribution {
                text: "© OpenStreetMap contributors",
                url: Some("https://www.openstreetmap.org/copyright"),
            },
        }
    }
}

impl Display for Basemap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Basemap {
    type Err = GisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|basemap| basemap.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GisError::Config(format!("unknown basemap '{s}'")))
    }
}
