use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Position on the map canvas, in logical pixels from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: ScreenPoint) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Size of the map canvas in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Display color stored as 8-bit RGB and written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn from_hex(value: &str) -> MapResult<Self> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| MapError::InvalidColor(value.to_string()))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MapError::InvalidColor(value.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| MapError::InvalidColor(value.to_string()))?;
        Ok(Self::from_u32(packed))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = MapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Common error type for dataset and state handling.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("invalid color literal: {0}")]
    InvalidColor(String),
    #[error("route {0} has no waypoints")]
    EmptyRoute(String),
    #[error("rating {rating} of {id} is outside 0..=5")]
    RatingOutOfRange { id: String, rating: f64 },
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),
    #[error("state snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_parses_and_prints_hex() {
        let color = Rgb::from_hex("#4ecdc4").unwrap();
        assert_eq!(color, Rgb::new(0x4E, 0xCD, 0xC4));
        assert_eq!(color.to_string(), "#4ECDC4");
    }

    #[test]
    fn rgb_rejects_malformed_literals() {
        assert!(Rgb::from_hex("4ECDC4").is_err());
        assert!(Rgb::from_hex("#4ECDC").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn rgb_serializes_as_string() {
        let json = serde_json::to_string(&Rgb::from_u32(0xFF6B6B)).unwrap();
        assert_eq!(json, "\"#FF6B6B\"");
        let back: Rgb = serde_json::from_str("\"#aa96da\"").unwrap();
        assert_eq!(back, Rgb::from_u32(0xAA96DA));
    }

    #[test]
    fn screen_distance_is_euclidean() {
        let a = ScreenPoint::new(0.0, 0.0);
        assert_eq!(a.distance(ScreenPoint::new(3.0, 4.0)), 5.0);
    }
}
