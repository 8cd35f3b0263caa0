use crate::location::LocationOutcome;
use crate::state::Intent;
use log::{debug, info};

/// Writes user interactions to the `log` facade.
pub struct InteractionLog;

impl InteractionLog {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_intent(&self, intent: &Intent) {
        debug!("intent {:?}", intent);
    }

    pub fn record_location(&self, outcome: &LocationOutcome) {
        match outcome.user_location {
            Some(position) => self.record(&format!(
                "viewport centred on device at ({:.4}, {:.4}), zoom {}",
                position.lat, position.lng, outcome.zoom
            )),
            None => self.record(&format!(
                "viewport centred on default ({:.4}, {:.4}), zoom {}",
                outcome.center.lat, outcome.center.lng, outcome.zoom
            )),
        }
    }
}

impl Default for InteractionLog {
    fn default() -> Self {
        Self::new()
    }
}
