//! View-model core for the PulseQuest city map.
//!
//! The crate holds the bundled attraction/route dataset, the viewport and its
//! zoom-dependent marker cap, draw-ready marker and route descriptions, the
//! panel view models, and the controller that applies user intents to a
//! single serialisable map state. Nothing here depends on a UI toolkit.

pub mod dataset;
pub mod location;
pub mod math;
pub mod panel;
pub mod prelude;
pub mod render;
pub mod state;
pub mod telemetry;
pub mod viewport;

pub use prelude::{LatLng, MapError, MapResult, Rgb, ScreenPoint, ScreenSize};
pub use state::{Intent, MapController, MapState};
