pub mod controller;
pub mod intent;
pub mod selection;

pub use controller::MapController;
pub use intent::{Intent, IntentKind};
pub use selection::{MapState, SelectionState};
