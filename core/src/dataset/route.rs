use crate::prelude::{LatLng, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a walking route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named walking route drawn as a polyline through its waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub color: Rgb,
    pub waypoints: Vec<LatLng>,
    pub distance: String,
    pub duration: String,
}

impl Route {
    /// Line shown under the route name in the picker, e.g. `3.2 km • 45 min`.
    pub fn summary(&self) -> String {
        format!("{} \u{2022} {}", self.distance, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_joins_distance_and_duration() {
        let route = Route {
            id: RouteId::new("loop"),
            name: "Loop".into(),
            color: Rgb::from_u32(0x95E1D3),
            waypoints: vec![LatLng::new(-37.8, 144.9)],
            distance: "4.5 km".into(),
            duration: "60 min".into(),
        };
        assert_eq!(route.summary(), "4.5 km • 60 min");
    }
}
