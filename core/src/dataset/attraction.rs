use crate::prelude::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an attraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttractionId(pub String);

impl AttractionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of an attraction. Drives marker color and the legend.
///
/// `Other` absorbs any category key this build does not know about; it is
/// drawn with the default marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttractionType {
    Landmark,
    Park,
    Museum,
    Gallery,
    Restaurant,
    Cafe,
    Shopping,
    StreetArt,
    Viewpoint,
    Entertainment,
    #[serde(other)]
    Other,
}

impl AttractionType {
    /// Every category that has its own color, in legend order.
    pub const MAPPED: [AttractionType; 10] = [
        AttractionType::Landmark,
        AttractionType::Park,
        AttractionType::Museum,
        AttractionType::Gallery,
        AttractionType::Restaurant,
        AttractionType::Cafe,
        AttractionType::Shopping,
        AttractionType::StreetArt,
        AttractionType::Viewpoint,
        AttractionType::Entertainment,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AttractionType::Landmark => "landmark",
            AttractionType::Park => "park",
            AttractionType::Museum => "museum",
            AttractionType::Gallery => "gallery",
            AttractionType::Restaurant => "restaurant",
            AttractionType::Cafe => "cafe",
            AttractionType::Shopping => "shopping",
            AttractionType::StreetArt => "street_art",
            AttractionType::Viewpoint => "viewpoint",
            AttractionType::Entertainment => "entertainment",
            AttractionType::Other => "other",
        }
    }

    /// Human-readable label: the key with underscores shown as spaces.
    pub fn label(&self) -> String {
        self.key().replace('_', " ")
    }
}

/// Opening-hours record as shown in the details panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub is_open: bool,
    pub weekday_text: Vec<String>,
}

impl OpeningHours {
    pub fn new(is_open: bool, weekday_text: &[&str]) -> Self {
        Self {
            is_open,
            weekday_text: weekday_text.iter().map(|line| line.to_string()).collect(),
        }
    }
}

/// A visitor review. Ratings are whole stars from 0 to 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub text: String,
}

impl Review {
    pub fn new(author: &str, rating: u8, text: &str) -> Self {
        Self {
            author: author.into(),
            rating,
            text: text.into(),
        }
    }
}

/// Static point of interest shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: AttractionId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttractionType,
    pub position: LatLng,
    pub description: String,
    pub rating: f64,
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Attraction {
    pub fn is_open(&self) -> bool {
        self.opening_hours.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_replaces_underscores() {
        assert_eq!(AttractionType::StreetArt.label(), "street art");
        assert_eq!(AttractionType::Museum.label(), "museum");
    }

    #[test]
    fn unknown_type_key_deserializes_as_other() {
        let kind: AttractionType = serde_json::from_str("\"rooftop_bar\"").unwrap();
        assert_eq!(kind, AttractionType::Other);
        let kind: AttractionType = serde_json::from_str("\"street_art\"").unwrap();
        assert_eq!(kind, AttractionType::StreetArt);
    }

    #[test]
    fn mapped_table_excludes_catch_all() {
        assert!(!AttractionType::MAPPED.contains(&AttractionType::Other));
    }
}
