use log::debug;
use pulsecore::location::{LocationError, LocationOutcome, LocationResolver, PositionFix};
use reqwest::StatusCode;

/// Position endpoint of the companion `locator` service.
pub const LOCATOR_URL: &str = "http://127.0.0.1:9100/position";

async fn fetch_position(url: &str) -> Result<PositionFix, LocationError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| LocationError::Transport(e.to_string()))?;
    let status = response.status();
    debug!("locator answered {}", status);

    if status.is_success() {
        response
            .json::<PositionFix>()
            .await
            .map_err(|e| LocationError::Transport(e.to_string()))
    } else if status == StatusCode::SERVICE_UNAVAILABLE {
        Err(LocationError::Unavailable)
    } else if status == StatusCode::FORBIDDEN || status == StatusCode::UNAUTHORIZED {
        Err(LocationError::Denied)
    } else {
        Err(LocationError::Transport(format!("unexpected status {}", status)))
    }
}

/// Asks for the device position once and settles the viewport on the answer.
pub async fn locate_device(url: &'static str) -> LocationOutcome {
    LocationResolver::resolve(fetch_position(url)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsecore::dataset::melbourne::MELBOURNE_CENTER;

    #[tokio::test]
    async fn unreachable_locator_falls_back_to_city_centre() {
        let outcome = locate_device("http://127.0.0.1:9/position").await;
        assert_eq!(outcome.center, MELBOURNE_CENTER);
        assert_eq!(outcome.zoom, 14);
        assert!(outcome.user_location.is_none());
    }
}
