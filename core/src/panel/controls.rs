use crate::dataset::{Route, RouteId};
use crate::prelude::Rgb;
use crate::state::{Intent, SelectionState};

pub const TITLE: &str = "PulseQuest";
pub const SHOW_ROUTES_LABEL: &str = "Show Routes";
pub const OPEN_ONLY_LABEL: &str = "Open Now Only";
pub const ROUTES_HEADING: &str = "Available Routes";

#[derive(Debug, Clone, PartialEq)]
pub struct RouteListItem {
    pub id: RouteId,
    pub name: String,
    pub color: Rgb,
    pub summary: String,
    pub selected: bool,
}

/// Toggles and route picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub show_routes: bool,
    pub filter_open_only: bool,
    /// Only populated while routes are shown.
    pub routes: Vec<RouteListItem>,
}

impl ControlsView {
    pub fn new(selection: &SelectionState, routes: &[Route]) -> Self {
        let routes = if selection.show_routes {
            routes
                .iter()
                .map(|route| RouteListItem {
                    id: route.id.clone(),
                    name: route.name.clone(),
                    color: route.color,
                    summary: route.summary(),
                    selected: selection.selected_route.as_ref() == Some(&route.id),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            show_routes: selection.show_routes,
            filter_open_only: selection.filter_open_only,
            routes,
        }
    }
}

/// Intent for a click on a route list item: clicking the selected route
/// clears the selection, any other route replaces it.
pub fn route_list_clicked(selected: Option<&RouteId>, clicked: &RouteId) -> Intent {
    if selected == Some(clicked) {
        Intent::SelectRoute(None)
    } else {
        Intent::SelectRoute(Some(clicked.clone()))
    }
}
