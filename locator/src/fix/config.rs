use anyhow::Context;
use pulsecore::dataset::melbourne::MELBOURNE_CENTER;
use pulsecore::LatLng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where the simulated device is and how noisy its fix is.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Maximum horizontal error applied to each fix, in metres.
    pub jitter_m: f64,
    pub seed: u64,
    /// `false` simulates a device without location or with permission denied.
    pub available: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            latitude: MELBOURNE_CENTER.lat,
            longitude: MELBOURNE_CENTER.lng,
            jitter_m: 0.0,
            seed: 0,
            available: true,
        }
    }
}

impl LocatorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading locator config {}", path_ref.display()))?;
        let config: LocatorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing locator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(latitude: f64, longitude: f64, jitter_m: f64, seed: u64, available: bool) -> Self {
        Self {
            latitude,
            longitude,
            jitter_m,
            seed,
            available,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_position() {
        let cfg = LocatorConfig::from_args(-37.80, 144.95, 5.0, 1, true);
        assert_eq!(cfg.position(), LatLng::new(-37.80, 144.95));
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"latitude: -37.8304\nlongitude: 144.9796\navailable: false\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = LocatorConfig::load(&path).unwrap();
        assert_eq!(cfg.latitude, -37.8304);
        assert!(!cfg.available);
        assert_eq!(cfg.jitter_m, 0.0);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = LocatorConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(err.to_string().contains("reading locator config"));
    }
}
