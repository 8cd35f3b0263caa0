use crate::dataset::{AttractionId, RouteId};
use crate::math::distance_to_polyline;
use crate::prelude::{ScreenPoint, ScreenSize};
use crate::render::markers::{marker_head, MarkerSpec, UserLocationMarker, MARKER_SIZE};
use crate::render::routes::RouteOverlay;
use crate::viewport::ViewportState;

/// Extra slack around a polyline stroke that still counts as a click on it.
pub const ROUTE_HIT_SLACK: f32 = 4.0;

/// What a click on the map canvas landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapHit {
    Marker(AttractionId),
    Route(RouteId),
    /// The device position circle. Shows its popup, selects nothing.
    UserLocation,
}

/// Markers win over the user location circle, which wins over routes;
/// among markers the last drawn wins.
pub fn hit_test(
    viewport: &ViewportState,
    size: ScreenSize,
    point: ScreenPoint,
    markers: &[MarkerSpec],
    user_location: Option<&UserLocationMarker>,
    overlays: &[RouteOverlay],
) -> Option<MapHit> {
    let marker = markers.iter().rev().find(|marker| {
        let head = marker_head(viewport.project(marker.position, size));
        head.distance(point) <= MARKER_SIZE / 2.0
    });
    if let Some(marker) = marker {
        return Some(MapHit::Marker(marker.id.clone()));
    }

    if let Some(user) = user_location {
        if viewport.project(user.position, size).distance(point) <= user.radius {
            return Some(MapHit::UserLocation);
        }
    }

    overlays
        .iter()
        .rev()
        .find(|overlay| {
            let line: Vec<_> = overlay
                .waypoints
                .iter()
                .map(|waypoint| viewport.project(*waypoint, size))
                .collect();
            distance_to_polyline(point, &line) <= overlay.weight / 2.0 + ROUTE_HIT_SLACK
        })
        .map(|overlay| MapHit::Route(overlay.id.clone()))
}
