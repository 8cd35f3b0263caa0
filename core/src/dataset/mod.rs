//! Immutable attraction and route tables.

pub mod attraction;
pub mod melbourne;
pub mod route;

pub use attraction::{Attraction, AttractionId, AttractionType, OpeningHours, Review};
pub use route::{Route, RouteId};

use crate::prelude::{MapError, MapResult};
use std::collections::HashSet;

/// The full set of attractions and routes loaded for a session.
#[derive(Debug, Clone)]
pub struct Dataset {
    attractions: Vec<Attraction>,
    routes: Vec<Route>,
}

impl Dataset {
    pub fn new(attractions: Vec<Attraction>, routes: Vec<Route>) -> Self {
        Self {
            attractions,
            routes,
        }
    }

    /// The bundled Melbourne dataset.
    pub fn melbourne() -> Self {
        Self::new(melbourne::attractions(), melbourne::routes())
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Attractions after the open-now filter, in stored order.
    pub fn filtered(&self, open_only: bool) -> Vec<&Attraction> {
        self.attractions
            .iter()
            .filter(|attraction| !open_only || attraction.is_open())
            .collect()
    }

    pub fn attraction(&self, id: &AttractionId) -> Option<&Attraction> {
        self.attractions.iter().find(|attraction| &attraction.id == id)
    }

    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|route| &route.id == id)
    }

    /// Checks the invariants the renderers rely on.
    pub fn validate(&self) -> MapResult<()> {
        let mut seen = HashSet::new();
        for attraction in &self.attractions {
            if !seen.insert(attraction.id.as_str()) {
                return Err(MapError::DuplicateId(attraction.id.to_string()));
            }
            if !(0.0..=5.0).contains(&attraction.rating) {
                return Err(MapError::RatingOutOfRange {
                    id: attraction.id.to_string(),
                    rating: attraction.rating,
                });
            }
            if let Some(review) = attraction.reviews.iter().find(|review| review.rating > 5) {
                return Err(MapError::RatingOutOfRange {
                    id: format!("{} review by {}", attraction.id, review.author),
                    rating: f64::from(review.rating),
                });
            }
        }

        let mut seen = HashSet::new();
        for route in &self.routes {
            if !seen.insert(route.id.as_str()) {
                return Err(MapError::DuplicateId(route.id.to_string()));
            }
            if route.waypoints.is_empty() {
                return Err(MapError::EmptyRoute(route.id.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::melbourne()
    }
}
