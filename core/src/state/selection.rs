use crate::dataset::{AttractionId, RouteId};
use crate::prelude::LatLng;
use crate::viewport::ViewportState;
use serde::{Deserialize, Serialize};

/// User choices and toggles. Transient: lives only for the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_attraction: Option<AttractionId>,
    pub selected_route: Option<RouteId>,
    pub show_routes: bool,
    pub filter_open_only: bool,
}

/// The complete mutable state behind the map view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapState {
    pub viewport: ViewportState,
    pub selection: SelectionState,
    /// Device position once the location request succeeded.
    pub user_location: Option<LatLng>,
}
