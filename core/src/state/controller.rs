use crate::dataset::{Attraction, Dataset};
use crate::panel::{legend_entries, ControlsView, DetailsView, LegendEntry};
use crate::prelude::MapResult;
use crate::render::{route_overlays, visible_markers, MarkerSpec, RouteOverlay, UserLocationMarker};
use crate::state::intent::Intent;
use crate::state::selection::MapState;
use crate::telemetry::{InteractionLog, InteractionMetrics, MetricsSnapshot};
use crate::viewport::ViewportState;
use log::warn;

/// Owns the map state and applies intents to it. Views are derived on demand.
pub struct MapController {
    dataset: Dataset,
    state: MapState,
    log: InteractionLog,
    metrics: InteractionMetrics,
}

impl MapController {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_state(dataset, MapState::default())
    }

    pub fn with_state(dataset: Dataset, state: MapState) -> Self {
        Self {
            dataset,
            state,
            log: InteractionLog::new(),
            metrics: InteractionMetrics::new(),
        }
    }

    /// Applies one intent. Returns `false` when the state did not change.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let kind = intent.kind();
        self.log.record_intent(&intent);

        let changed = match intent {
            Intent::ZoomChanged(zoom) => self.state.viewport.set_zoom(zoom),
            Intent::Panned(center) => {
                let changed = self.state.viewport.center != center;
                self.state.viewport.center = center;
                changed
            }
            Intent::SelectAttraction(id) => {
                if self.dataset.attraction(&id).is_none() {
                    warn!("ignoring selection of unknown attraction {}", id);
                    false
                } else {
                    self.state.selection.selected_attraction.replace(id.clone()) != Some(id)
                }
            }
            Intent::CloseDetails => self.state.selection.selected_attraction.take().is_some(),
            Intent::ToggleShowRoutes => {
                self.state.selection.show_routes = !self.state.selection.show_routes;
                true
            }
            Intent::ToggleOpenFilter => {
                self.state.selection.filter_open_only = !self.state.selection.filter_open_only;
                true
            }
            Intent::SelectRoute(Some(id)) if self.dataset.route(&id).is_none() => {
                warn!("ignoring selection of unknown route {}", id);
                false
            }
            Intent::SelectRoute(route) => {
                let changed = self.state.selection.selected_route != route;
                self.state.selection.selected_route = route;
                changed
            }
            Intent::LocationSettled(outcome) => {
                self.log.record_location(&outcome);
                self.state.viewport.recenter(outcome.center, outcome.zoom);
                self.state.user_location = outcome.user_location;
                true
            }
        };

        if changed {
            self.metrics.record_applied(kind);
        } else {
            self.metrics.record_ignored();
        }
        changed
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Attractions after the open-now filter, in stored order.
    pub fn filtered_attractions(&self) -> Vec<&Attraction> {
        self.dataset.filtered(self.state.selection.filter_open_only)
    }

    pub fn visible_markers(&self) -> Vec<MarkerSpec> {
        visible_markers(&self.filtered_attractions(), &self.state.viewport)
    }

    pub fn route_overlays(&self) -> Vec<RouteOverlay> {
        route_overlays(
            self.state.selection.show_routes,
            self.dataset.routes(),
            self.state.selection.selected_route.as_ref(),
        )
    }

    pub fn user_location_marker(&self) -> Option<UserLocationMarker> {
        self.state.user_location.map(UserLocationMarker::new)
    }

    pub fn selected_attraction(&self) -> Option<&Attraction> {
        self.state
            .selection
            .selected_attraction
            .as_ref()
            .and_then(|id| self.dataset.attraction(id))
    }

    pub fn details(&self) -> Option<DetailsView> {
        self.selected_attraction().map(DetailsView::new)
    }

    pub fn controls(&self) -> ControlsView {
        ControlsView::new(&self.state.selection, self.dataset.routes())
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend_entries()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Serialises the current state as JSON.
    pub fn snapshot(&self) -> MapResult<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Rebuilds a controller from [`snapshot`](Self::snapshot) output. The
    /// zoom is clamped and selections the dataset does not know are dropped,
    /// the same as `apply` would have done.
    pub fn restore(dataset: Dataset, snapshot: &str) -> MapResult<Self> {
        let mut state: MapState = serde_json::from_str(snapshot)?;
        state.viewport = ViewportState::new(state.viewport.center, state.viewport.zoom);

        let selection = &mut state.selection;
        if let Some(id) = selection.selected_attraction.take() {
            if dataset.attraction(&id).is_some() {
                selection.selected_attraction = Some(id);
            } else {
                warn!("dropping restored selection of unknown attraction {}", id);
            }
        }
        if let Some(id) = selection.selected_route.take() {
            if dataset.route(&id).is_some() {
                selection.selected_route = Some(id);
            } else {
                warn!("dropping restored selection of unknown route {}", id);
            }
        }
        Ok(Self::with_state(dataset, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::melbourne::MELBOURNE_CENTER;
    use crate::dataset::{AttractionId, RouteId};
    use crate::location::{LocationError, LocationResolver, PositionFix};
    use crate::panel::route_list_clicked;
    use crate::prelude::LatLng;

    fn controller() -> MapController {
        MapController::new(Dataset::melbourne())
    }

    #[test]
    fn starts_at_city_centre_with_nothing_selected() {
        let controller = controller();
        let state = controller.state();
        assert_eq!(state.viewport.zoom, 14);
        assert_eq!(state.viewport.center, MELBOURNE_CENTER);
        assert!(!state.selection.show_routes);
        assert!(!state.selection.filter_open_only);
        assert!(controller.details().is_none());
        assert!(controller.route_overlays().is_empty());
        assert_eq!(controller.visible_markers().len(), 15);
    }

    #[test]
    fn zoom_changes_marker_cap() {
        let mut controller = controller();
        assert!(controller.apply(Intent::ZoomChanged(12)));
        assert_eq!(controller.visible_markers().len(), 5);
        assert!(controller.apply(Intent::ZoomChanged(13)));
        assert_eq!(controller.visible_markers().len(), 10);
        assert!(controller.apply(Intent::ZoomChanged(15)));
        assert_eq!(controller.visible_markers().len(), 20);
        assert!(!controller.apply(Intent::ZoomChanged(15)));
    }

    #[test]
    fn open_filter_applies_before_cap() {
        let mut controller = controller();
        controller.apply(Intent::ZoomChanged(16));
        controller.apply(Intent::ToggleOpenFilter);
        let markers = controller.visible_markers();
        assert_eq!(markers.len(), controller.filtered_attractions().len());
        for marker in &markers {
            assert!(controller.dataset().attraction(&marker.id).unwrap().is_open());
        }
        controller.apply(Intent::ToggleOpenFilter);
        assert_eq!(controller.visible_markers().len(), 20);
    }

    #[test]
    fn selecting_and_closing_details() {
        let mut controller = controller();
        let id = AttractionId::new("melbourne-skydeck");
        assert!(controller.apply(Intent::SelectAttraction(id.clone())));
        assert!(!controller.apply(Intent::SelectAttraction(id)));
        assert_eq!(controller.details().unwrap().name, "Melbourne Skydeck");

        assert!(controller.apply(Intent::CloseDetails));
        assert!(controller.state().selection.selected_attraction.is_none());
        assert!(controller.details().is_none());
        assert!(!controller.apply(Intent::CloseDetails));
    }

    #[test]
    fn unknown_attraction_is_ignored() {
        let mut controller = controller();
        assert!(!controller.apply(Intent::SelectAttraction(AttractionId::new("nowhere"))));
        assert!(controller.state().selection.selected_attraction.is_none());
    }

    #[test]
    fn list_click_toggles_but_polyline_click_only_selects() {
        let mut controller = controller();
        controller.apply(Intent::ToggleShowRoutes);
        let yarra = RouteId::new("yarra-river");

        let intent = route_list_clicked(controller.state().selection.selected_route.as_ref(), &yarra);
        controller.apply(intent);
        assert_eq!(controller.state().selection.selected_route, Some(yarra.clone()));

        let intent = route_list_clicked(controller.state().selection.selected_route.as_ref(), &yarra);
        controller.apply(intent);
        assert_eq!(controller.state().selection.selected_route, None);

        controller.apply(Intent::route_polyline_clicked(&yarra));
        controller.apply(Intent::route_polyline_clicked(&yarra));
        assert_eq!(controller.state().selection.selected_route, Some(yarra.clone()));

        let overlays = controller.route_overlays();
        let emphasized: Vec<_> = overlays.iter().filter(|o| o.is_emphasized()).collect();
        assert_eq!(emphasized.len(), 1);
        assert_eq!(emphasized[0].id, yarra);
    }

    #[test]
    fn hiding_routes_keeps_selection_but_draws_nothing() {
        let mut controller = controller();
        controller.apply(Intent::ToggleShowRoutes);
        controller.apply(Intent::SelectRoute(Some(RouteId::new("laneways"))));
        controller.apply(Intent::ToggleShowRoutes);
        assert!(controller.route_overlays().is_empty());
        assert!(controller.controls().routes.is_empty());
        assert!(controller.state().selection.selected_route.is_some());
    }

    #[test]
    fn location_failure_recentres_on_default() {
        let mut controller = controller();
        controller.apply(Intent::ZoomChanged(11));
        controller.apply(Intent::Panned(LatLng::new(-37.9, 145.1)));
        controller.apply(Intent::LocationSettled(LocationResolver::settle(Err(
            LocationError::Unavailable,
        ))));
        assert_eq!(controller.state().viewport.center, MELBOURNE_CENTER);
        assert_eq!(controller.state().viewport.zoom, 14);
        assert!(controller.user_location_marker().is_none());
    }

    #[test]
    fn location_success_places_user_marker() {
        let mut controller = controller();
        let fix = PositionFix {
            latitude: -37.8150,
            longitude: 144.9700,
            accuracy_m: Some(8.0),
        };
        controller.apply(Intent::LocationSettled(LocationResolver::settle(Ok(fix))));
        let marker = controller.user_location_marker().unwrap();
        assert_eq!(marker.position, LatLng::new(-37.8150, 144.9700));
        assert_eq!(marker.radius, 10.0);
        assert_eq!(controller.state().viewport.center, marker.position);
    }

    #[test]
    fn snapshot_restores_state() {
        let mut controller = controller();
        controller.apply(Intent::ToggleShowRoutes);
        controller.apply(Intent::SelectRoute(Some(RouteId::new("gardens"))));
        controller.apply(Intent::SelectAttraction(AttractionId::new("acmi")));
        controller.apply(Intent::ZoomChanged(13));

        let json = controller.snapshot().unwrap();
        let restored = MapController::restore(Dataset::melbourne(), &json).unwrap();
        assert_eq!(restored.state(), controller.state());
        assert!(MapController::restore(Dataset::melbourne(), "{not json").is_err());
    }

    #[test]
    fn restore_clamps_zoom_and_drops_unknown_ids() {
        let json = r#"{
            "viewport": {"zoom": 99, "center": {"lat": -37.81, "lng": 144.96}},
            "selection": {
                "selected_attraction": "nowhere",
                "selected_route": "ghost",
                "show_routes": true,
                "filter_open_only": false
            },
            "user_location": null
        }"#;
        let restored = MapController::restore(Dataset::melbourne(), json).unwrap();
        let state = restored.state();
        assert_eq!(state.viewport.zoom, 18);
        assert!(state.selection.selected_attraction.is_none());
        assert!(state.selection.selected_route.is_none());
        assert!(state.selection.show_routes);

        let json = json.replace("99", "-4").replace("\"ghost\"", "\"laneways\"");
        let restored = MapController::restore(Dataset::melbourne(), &json).unwrap();
        assert_eq!(restored.state().viewport.zoom, 3);
        assert_eq!(
            restored.state().selection.selected_route,
            Some(RouteId::new("laneways"))
        );
    }

    #[test]
    fn metrics_count_applied_and_ignored() {
        let mut controller = controller();
        controller.apply(Intent::ToggleShowRoutes);
        controller.apply(Intent::ZoomChanged(13));
        controller.apply(Intent::ZoomChanged(13));
        let snapshot = controller.metrics();
        assert_eq!(snapshot.toggles, 1);
        assert_eq!(snapshot.zoom_changes, 1);
        assert_eq!(snapshot.ignored, 1);
    }
}
