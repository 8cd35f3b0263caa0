//! One-shot device location request and its fallback.

use crate::dataset::melbourne::MELBOURNE_CENTER;
use crate::prelude::LatLng;
use crate::viewport::LOCATED_ZOOM;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Position reported by the device location capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy_m: Option<f64>,
}

impl PositionFix {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Why no device position could be obtained.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location capability unavailable")]
    Unavailable,
    #[error("location permission denied")]
    Denied,
    #[error("location request failed: {0}")]
    Transport(String),
}

/// Where the map should settle once the location request completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationOutcome {
    pub center: LatLng,
    pub zoom: i32,
    /// Device position to mark on the map; `None` after a fallback.
    pub user_location: Option<LatLng>,
}

pub struct LocationResolver;

impl LocationResolver {
    /// Maps a location result onto the viewport. Failures fall back to the
    /// city centre without a location marker.
    pub fn settle(result: Result<PositionFix, LocationError>) -> LocationOutcome {
        match result {
            Ok(fix) => {
                let position = fix.position();
                info!(
                    "device location ({:.4}, {:.4})",
                    position.lat, position.lng
                );
                LocationOutcome {
                    center: position,
                    zoom: LOCATED_ZOOM,
                    user_location: Some(position),
                }
            }
            Err(err) => {
                warn!("{}; centring on default city coordinate", err);
                LocationOutcome {
                    center: MELBOURNE_CENTER,
                    zoom: LOCATED_ZOOM,
                    user_location: None,
                }
            }
        }
    }

    /// Awaits a single position request. No retry and no timeout of its own.
    pub async fn resolve<F>(request: F) -> LocationOutcome
    where
        F: Future<Output = Result<PositionFix, LocationError>>,
    {
        Self::settle(request.await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_fix_centres_on_device() {
        let fix = PositionFix {
            latitude: -37.80,
            longitude: 144.96,
            accuracy_m: Some(12.0),
        };
        let outcome = LocationResolver::settle(Ok(fix));
        assert_eq!(outcome.center, LatLng::new(-37.80, 144.96));
        assert_eq!(outcome.zoom, 14);
        assert_eq!(outcome.user_location, Some(LatLng::new(-37.80, 144.96)));
    }

    #[test]
    fn failure_falls_back_to_city_centre() {
        for err in [
            LocationError::Unavailable,
            LocationError::Denied,
            LocationError::Transport("connection refused".into()),
        ] {
            let outcome = LocationResolver::settle(Err(err));
            assert_eq!(outcome.center, MELBOURNE_CENTER);
            assert_eq!(outcome.zoom, 14);
            assert!(outcome.user_location.is_none());
        }
    }

    #[tokio::test]
    async fn resolve_awaits_request() {
        let outcome = LocationResolver::resolve(async { Err(LocationError::Denied) }).await;
        assert_eq!(outcome.center, MELBOURNE_CENTER);

        let outcome = LocationResolver::resolve(async {
            Ok(PositionFix {
                latitude: -37.81,
                longitude: 144.97,
                accuracy_m: None,
            })
        })
        .await;
        assert!(outcome.user_location.is_some());
    }

    #[test]
    fn fix_accuracy_is_optional_on_the_wire() {
        let fix: PositionFix =
            serde_json::from_str(r#"{"latitude":-37.8,"longitude":144.9}"#).unwrap();
        assert_eq!(fix.accuracy_m, None);
    }
}
