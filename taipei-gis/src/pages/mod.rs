//! Page models of the dashboard. Each page owns its state and exposes the operations its
//! controls trigger; rendering is left to the host.

pub mod buildings;
pub mod counter;
pub mod transit;

/// Title of the dashboard, shown above the sidebar links.
pub const DASHBOARD_TITLE: &str = "Taipei GIS dashboard";

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page with the click counter.
    Home,
    /// 2D map of the Taipei MRT network.
    Transit,
    /// 3D map of extruded buildings.
    Buildings,
}

impl Page {
    /// Pages in sidebar order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Transit, Page::Buildings];

    /// Route of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Transit => "/transit",
            Page::Buildings => "/buildings",
        }
    }

    /// Label of the sidebar link.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Transit => "2D Taipei MRT",
            Page::Buildings => "3D Taipei buildings",
        }
    }

    /// Heading of the page.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => DASHBOARD_TITLE,
            Page::Transit => "2D Taipei MRT map",
            Page::Buildings => "3D Taipei buildings (MapLibre + deck.gl)",
        }
    }
}
