//! Draw-ready descriptions of markers and route polylines.

pub mod hit;
pub mod markers;
pub mod palette;
pub mod routes;

pub use hit::{hit_test, MapHit};
pub use markers::{visible_markers, MarkerSpec, UserLocationMarker};
pub use palette::marker_color;
pub use routes::{route_overlays, RouteOverlay};
