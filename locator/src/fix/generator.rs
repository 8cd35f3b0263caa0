use crate::fix::config::LocatorConfig;
use pulsecore::location::PositionFix;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;

const METRES_PER_DEGREE: f64 = 111_320.0;

fn validate(config: &LocatorConfig) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&config.latitude) {
        anyhow::bail!("latitude {} outside -90..=90", config.latitude);
    }
    if !(-180.0..=180.0).contains(&config.longitude) {
        anyhow::bail!("longitude {} outside -180..=180", config.longitude);
    }
    if !config.jitter_m.is_finite() || config.jitter_m < 0.0 {
        anyhow::bail!("jitter_m must be a non-negative distance");
    }
    Ok(())
}

/// Builds the fix served to the map, or `None` when the device has no
/// location to offer.
pub fn build_fix(config: &LocatorConfig) -> anyhow::Result<Option<PositionFix>> {
    validate(config)?;
    if !config.available {
        return Ok(None);
    }

    let mut latitude = config.latitude;
    let mut longitude = config.longitude;
    if config.jitter_m > 0.0 {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let bearing = rng.gen_range(0.0..2.0 * PI);
        let distance = rng.gen_range(0.0..config.jitter_m);
        latitude += distance * bearing.cos() / METRES_PER_DEGREE;
        longitude +=
            distance * bearing.sin() / (METRES_PER_DEGREE * config.latitude.to_radians().cos());
    }

    Ok(Some(PositionFix {
        latitude,
        longitude,
        accuracy_m: (config.jitter_m > 0.0).then_some(config.jitter_m),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fix_without_jitter() {
        let config = LocatorConfig::from_args(-37.81, 144.96, 0.0, 0, true);
        let fix = build_fix(&config).unwrap().unwrap();
        assert_eq!(fix.latitude, -37.81);
        assert_eq!(fix.longitude, 144.96);
        assert_eq!(fix.accuracy_m, None);
    }

    #[test]
    fn jitter_is_bounded_and_seeded() {
        let config = LocatorConfig::from_args(-37.81, 144.96, 50.0, 9, true);
        let first = build_fix(&config).unwrap().unwrap();
        let second = build_fix(&config).unwrap().unwrap();
        assert_eq!(first, second);

        let dlat = (first.latitude - config.latitude) * METRES_PER_DEGREE;
        let dlng = (first.longitude - config.longitude)
            * METRES_PER_DEGREE
            * config.latitude.to_radians().cos();
        assert!((dlat * dlat + dlng * dlng).sqrt() <= 50.0 + 1e-6);
        assert_eq!(first.accuracy_m, Some(50.0));
    }

    #[test]
    fn unavailable_device_has_no_fix() {
        let config = LocatorConfig::from_args(-37.81, 144.96, 0.0, 0, false);
        assert!(build_fix(&config).unwrap().is_none());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(build_fix(&LocatorConfig::from_args(95.0, 0.0, 0.0, 0, true)).is_err());
        assert!(build_fix(&LocatorConfig::from_args(0.0, 0.0, -1.0, 0, true)).is_err());
    }
}
