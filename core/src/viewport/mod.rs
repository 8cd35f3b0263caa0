//! Map centre/zoom tracking and the zoom-dependent marker cap.

use crate::dataset::melbourne::MELBOURNE_CENTER;
use crate::math::mercator::{self, TilePlacement};
use crate::prelude::{LatLng, ScreenPoint, ScreenSize};
use serde::{Deserialize, Serialize};

/// Zoom used at startup and after the location request settles.
pub const LOCATED_ZOOM: i32 = 14;
pub const MIN_ZOOM: i32 = 3;
pub const MAX_ZOOM: i32 = 18;

/// Upper bound on the number of attraction markers drawn at a zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCap {
    Limited(usize),
    Unbounded,
}

impl MarkerCap {
    /// Step function: `<= 12` shows 5, `<= 13` shows 10, `<= 14` shows 15,
    /// anything closer shows every marker.
    pub fn for_zoom(zoom: i32) -> Self {
        if zoom <= 12 {
            MarkerCap::Limited(5)
        } else if zoom <= 13 {
            MarkerCap::Limited(10)
        } else if zoom <= 14 {
            MarkerCap::Limited(15)
        } else {
            MarkerCap::Unbounded
        }
    }

    /// Resolves the cap against a list of `total` items.
    pub fn limit(self, total: usize) -> usize {
        match self {
            MarkerCap::Limited(cap) => cap,
            MarkerCap::Unbounded => total,
        }
    }
}

/// Current map centre and integer zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: i32,
    pub center: LatLng,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: LOCATED_ZOOM,
            center: MELBOURNE_CENTER,
        }
    }
}

impl ViewportState {
    pub fn new(center: LatLng, zoom: i32) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn marker_cap(&self) -> MarkerCap {
        MarkerCap::for_zoom(self.zoom)
    }

    /// Maximum number of markers drawn for a list of `total` attractions.
    pub fn max_visible_markers(&self, total: usize) -> usize {
        self.marker_cap().limit(total)
    }

    /// Zoom level reached after `steps` wheel notches, clamped.
    pub fn stepped_zoom(&self, steps: i32) -> i32 {
        self.zoom.saturating_add(steps).clamp(MIN_ZOOM, MAX_ZOOM)
    }

    /// Applies a new zoom level. Returns `false` when nothing changed.
    pub fn set_zoom(&mut self, zoom: i32) -> bool {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom == self.zoom {
            return false;
        }
        self.zoom = zoom;
        true
    }

    pub fn recenter(&mut self, center: LatLng, zoom: i32) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Canvas position of `position` for a canvas of `size`.
    pub fn project(&self, position: LatLng, size: ScreenSize) -> ScreenPoint {
        let zoom = f64::from(self.zoom);
        let (cx, cy) = mercator::project(self.center, zoom);
        let (px, py) = mercator::project(position, zoom);
        ScreenPoint::new(
            (px - cx) as f32 + size.width / 2.0,
            (py - cy) as f32 + size.height / 2.0,
        )
    }

    /// Coordinate under a canvas position.
    pub fn unproject(&self, point: ScreenPoint, size: ScreenSize) -> LatLng {
        let zoom = f64::from(self.zoom);
        let (cx, cy) = mercator::project(self.center, zoom);
        mercator::unproject(
            cx + f64::from(point.x - size.width / 2.0),
            cy + f64::from(point.y - size.height / 2.0),
            zoom,
        )
    }

    /// Viewport at `zoom` that keeps the coordinate under `point` in place.
    pub fn zoomed_at(&self, zoom: i32, point: ScreenPoint, size: ScreenSize) -> ViewportState {
        let anchor = self.unproject(point, size);
        let mut next = ViewportState::new(self.center, zoom);
        let drifted = next.project(anchor, size);
        next.center = next.pan_by(point.x - drifted.x, point.y - drifted.y);
        next
    }

    /// Map tiles needed to fill a canvas of `size`.
    pub fn visible_tiles(&self, size: ScreenSize) -> Vec<TilePlacement> {
        mercator::visible_tiles(self.center, self.zoom.max(0) as u32, size)
    }

    /// Centre after the map content is dragged by (`dx`, `dy`) pixels.
    pub fn pan_by(&self, dx: f32, dy: f32) -> LatLng {
        let zoom = f64::from(self.zoom);
        let (cx, cy) = mercator::project(self.center, zoom);
        mercator::unproject(cx - f64::from(dx), cy - f64::from(dy), zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_steps_with_inclusive_boundaries() {
        assert_eq!(MarkerCap::for_zoom(3), MarkerCap::Limited(5));
        assert_eq!(MarkerCap::for_zoom(12), MarkerCap::Limited(5));
        assert_eq!(MarkerCap::for_zoom(13), MarkerCap::Limited(10));
        assert_eq!(MarkerCap::for_zoom(14), MarkerCap::Limited(15));
        assert_eq!(MarkerCap::for_zoom(15), MarkerCap::Unbounded);
        assert_eq!(MarkerCap::for_zoom(18), MarkerCap::Unbounded);
    }

    #[test]
    fn unbounded_cap_resolves_to_total() {
        let viewport = ViewportState::new(MELBOURNE_CENTER, 16);
        assert_eq!(viewport.max_visible_markers(42), 42);
        let viewport = ViewportState::new(MELBOURNE_CENTER, 13);
        assert_eq!(viewport.max_visible_markers(42), 10);
    }

    #[test]
    fn default_viewport_is_city_centre_at_fourteen() {
        let viewport = ViewportState::default();
        assert_eq!(viewport.zoom, LOCATED_ZOOM);
        assert_eq!(viewport.center, MELBOURNE_CENTER);
    }

    #[test]
    fn set_zoom_reports_changes_and_clamps() {
        let mut viewport = ViewportState::default();
        assert!(!viewport.set_zoom(14));
        assert!(viewport.set_zoom(40));
        assert_eq!(viewport.zoom, MAX_ZOOM);
        assert_eq!(viewport.stepped_zoom(1), MAX_ZOOM);
        assert_eq!(viewport.stepped_zoom(-2), MAX_ZOOM - 2);
    }

    #[test]
    fn centre_projects_to_canvas_middle() {
        let viewport = ViewportState::default();
        let size = ScreenSize::new(800.0, 600.0);
        let point = viewport.project(viewport.center, size);
        assert!((point.x - 400.0).abs() < 1e-3);
        assert!((point.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn dragging_right_moves_centre_west() {
        let viewport = ViewportState::default();
        let center = viewport.pan_by(100.0, 0.0);
        assert!(center.lng < viewport.center.lng);
        assert!((center.lat - viewport.center.lat).abs() < 1e-9);
    }

    #[test]
    fn unproject_inverts_project() {
        let viewport = ViewportState::default();
        let size = ScreenSize::new(640.0, 480.0);
        let target = LatLng::new(-37.8179, 144.9691);
        let back = viewport.unproject(viewport.project(target, size), size);
        assert!((back.lat - target.lat).abs() < 1e-5);
        assert!((back.lng - target.lng).abs() < 1e-5);
    }

    #[test]
    fn zooming_at_cursor_keeps_point_fixed() {
        let viewport = ViewportState::default();
        let size = ScreenSize::new(800.0, 600.0);
        let cursor = ScreenPoint::new(620.0, 140.0);
        let before = viewport.unproject(cursor, size);

        let next = viewport.zoomed_at(15, cursor, size);
        assert_eq!(next.zoom, 15);
        let after = next.unproject(cursor, size);
        assert!((after.lat - before.lat).abs() < 1e-5);
        assert!((after.lng - before.lng).abs() < 1e-5);
        assert_ne!(next.center, viewport.center);
    }

    #[test]
    fn zooming_at_centre_keeps_centre() {
        let viewport = ViewportState::default();
        let size = ScreenSize::new(800.0, 600.0);
        let next = viewport.zoomed_at(13, ScreenPoint::new(400.0, 300.0), size);
        assert!((next.center.lat - viewport.center.lat).abs() < 1e-6);
        assert!((next.center.lng - viewport.center.lng).abs() < 1e-6);
    }

    #[test]
    fn visible_tiles_cover_the_canvas() {
        let viewport = ViewportState::default();
        let tiles = viewport.visible_tiles(ScreenSize::new(800.0, 600.0));
        assert!(tiles.len() >= 12);
        assert!(tiles.iter().all(|tile| tile.coords.z == 14));
        assert!(tiles.iter().any(|tile| tile.coords.x == 14789 && tile.coords.y == 10053));
    }
}
