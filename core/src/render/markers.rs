use crate::dataset::{Attraction, AttractionId};
use crate::prelude::{LatLng, Rgb, ScreenPoint};
use crate::render::palette::{marker_color, USER_LOCATION_COLOR};
use crate::viewport::ViewportState;

/// Edge length of the square pin icon; the icon is anchored at its bottom centre.
pub const MARKER_SIZE: f32 = 24.0;

pub const USER_LOCATION_RADIUS: f32 = 10.0;
pub const USER_LOCATION_FILL_OPACITY: f32 = 0.8;

/// One attraction marker ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: AttractionId,
    pub position: LatLng,
    pub color: Rgb,
    pub popup: String,
}

impl MarkerSpec {
    pub fn from_attraction(attraction: &Attraction) -> Self {
        Self {
            id: attraction.id.clone(),
            position: attraction.position,
            color: marker_color(attraction.kind),
            popup: format!("{}\n{} / 5", attraction.name, attraction.rating),
        }
    }
}

/// Centre of the pin head for a marker anchored at `anchor`.
pub fn marker_head(anchor: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(anchor.x, anchor.y - MARKER_SIZE / 2.0)
}

/// Markers for the filtered list: the first `cap` entries in list order.
pub fn visible_markers(attractions: &[&Attraction], viewport: &ViewportState) -> Vec<MarkerSpec> {
    let cap = viewport.max_visible_markers(attractions.len());
    attractions
        .iter()
        .take(cap)
        .map(|attraction| MarkerSpec::from_attraction(attraction))
        .collect()
}

/// Circle drawn at the device position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserLocationMarker {
    pub position: LatLng,
    pub color: Rgb,
    pub radius: f32,
    pub fill_opacity: f32,
}

impl UserLocationMarker {
    pub const POPUP: &'static str = "Your Location";

    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            color: USER_LOCATION_COLOR,
            radius: USER_LOCATION_RADIUS,
            fill_opacity: USER_LOCATION_FILL_OPACITY,
        }
    }
}
