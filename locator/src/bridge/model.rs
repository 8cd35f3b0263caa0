use pulsecore::location::PositionFix;
use serde::{Deserialize, Serialize};

/// State behind the HTTP endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocatorModel {
    pub fix: Option<PositionFix>,
    pub requests_served: usize,
}
