use crate::dataset::{AttractionId, RouteId};
use crate::location::LocationOutcome;
use crate::prelude::LatLng;
use serde::{Deserialize, Serialize};

/// Every way the map state can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Zoom gesture finished at the given level.
    ZoomChanged(i32),
    Panned(LatLng),
    SelectAttraction(AttractionId),
    CloseDetails,
    ToggleShowRoutes,
    ToggleOpenFilter,
    /// Replace the route selection; `None` clears it.
    SelectRoute(Option<RouteId>),
    LocationSettled(LocationOutcome),
}

impl Intent {
    /// A click on a drawn route always selects it, even when already selected.
    pub fn route_polyline_clicked(id: &RouteId) -> Self {
        Intent::SelectRoute(Some(id.clone()))
    }

    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::ZoomChanged(_) => IntentKind::Zoom,
            Intent::Panned(_) => IntentKind::Pan,
            Intent::SelectAttraction(_) | Intent::CloseDetails | Intent::SelectRoute(_) => {
                IntentKind::Selection
            }
            Intent::ToggleShowRoutes | Intent::ToggleOpenFilter => IntentKind::Toggle,
            Intent::LocationSettled(_) => IntentKind::Location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    Zoom,
    Pan,
    Selection,
    Toggle,
    Location,
}
