use crate::dataset::{Route, RouteId};
use crate::prelude::{LatLng, Rgb};

pub const SELECTED_OPACITY: f32 = 1.0;
pub const SELECTED_WEIGHT: f32 = 6.0;
pub const IDLE_OPACITY: f32 = 0.5;
pub const IDLE_WEIGHT: f32 = 3.0;

/// Styled polyline for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    pub id: RouteId,
    pub color: Rgb,
    pub opacity: f32,
    pub weight: f32,
    pub waypoints: Vec<LatLng>,
}

impl RouteOverlay {
    pub fn is_emphasized(&self) -> bool {
        self.weight >= SELECTED_WEIGHT
    }
}

/// Polylines to draw. Empty while routes are hidden; otherwise one per route
/// with the selected route emphasised.
pub fn route_overlays(
    show_routes: bool,
    routes: &[Route],
    selected: Option<&RouteId>,
) -> Vec<RouteOverlay> {
    if !show_routes {
        return Vec::new();
    }

    routes
        .iter()
        .map(|route| {
            let is_selected = selected == Some(&route.id);
            RouteOverlay {
                id: route.id.clone(),
                color: route.color,
                opacity: if is_selected { SELECTED_OPACITY } else { IDLE_OPACITY },
                weight: if is_selected { SELECTED_WEIGHT } else { IDLE_WEIGHT },
                waypoints: route.waypoints.clone(),
            }
        })
        .collect()
}
