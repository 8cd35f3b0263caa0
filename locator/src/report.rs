use anyhow::Context;
use pulsecore::dataset::Dataset;
use pulsecore::location::{LocationError, LocationResolver, PositionFix};
use pulsecore::{Intent, LatLng, MapController};
use std::fmt;

pub struct MarkerLine {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// What the map would draw after startup at a given zoom.
pub struct ViewReport {
    pub center: LatLng,
    pub zoom: i32,
    pub total: usize,
    pub markers: Vec<MarkerLine>,
    pub located: bool,
}

impl ViewReport {
    pub fn build(
        dataset: Dataset,
        fix: Option<PositionFix>,
        zoom: i32,
        open_only: bool,
    ) -> anyhow::Result<Self> {
        dataset.validate().context("validating bundled dataset")?;

        let mut controller = MapController::new(dataset);
        let outcome = LocationResolver::settle(fix.ok_or(LocationError::Unavailable));
        controller.apply(Intent::LocationSettled(outcome));
        controller.apply(Intent::ZoomChanged(zoom));
        if open_only {
            controller.apply(Intent::ToggleOpenFilter);
        }

        let markers = controller
            .visible_markers()
            .into_iter()
            .map(|marker| {
                let name = controller
                    .dataset()
                    .attraction(&marker.id)
                    .map(|attraction| attraction.name.clone())
                    .unwrap_or_default();
                MarkerLine {
                    id: marker.id.to_string(),
                    name,
                    color: marker.color.to_string(),
                }
            })
            .collect();

        let state = controller.state();
        Ok(Self {
            center: state.viewport.center,
            zoom: state.viewport.zoom,
            total: controller.filtered_attractions().len(),
            markers,
            located: state.user_location.is_some(),
        })
    }
}

impl fmt::Display for ViewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "centre ({:.4}, {:.4}) [{}] zoom {} -> {} of {} attractions",
            self.center.lat,
            self.center.lng,
            if self.located { "device" } else { "default" },
            self.zoom,
            self.markers.len(),
            self.total
        )?;
        for marker in &self.markers {
            writeln!(f, "  {} {:<28} {}", marker.color, marker.name, marker.id)?;
        }
        Ok(())
    }
}
