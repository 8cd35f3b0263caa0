use crate::dataset::AttractionType;
use crate::prelude::Rgb;

/// Marker color for categories without an entry of their own.
pub const DEFAULT_MARKER_COLOR: Rgb = Rgb::from_u32(0x9C27B0);

pub const USER_LOCATION_COLOR: Rgb = Rgb::from_u32(0x4285F4);

pub const STAR_FILLED: Rgb = Rgb::from_u32(0xFFD700);
pub const STAR_EMPTY: Rgb = Rgb::from_u32(0xDDDDDD);

/// Type to marker color table.
pub fn marker_color(kind: AttractionType) -> Rgb {
    match kind {
        AttractionType::Landmark => Rgb::from_u32(0xFF5722),
        AttractionType::Park => Rgb::from_u32(0x4CAF50),
        AttractionType::Museum => Rgb::from_u32(0x2196F3),
        AttractionType::Gallery => Rgb::from_u32(0xE91E63),
        AttractionType::Restaurant => Rgb::from_u32(0xFF9800),
        AttractionType::Cafe => Rgb::from_u32(0x795548),
        AttractionType::Shopping => Rgb::from_u32(0x00BCD4),
        AttractionType::StreetArt => Rgb::from_u32(0xFFC107),
        AttractionType::Viewpoint => Rgb::from_u32(0x3F51B5),
        AttractionType::Entertainment => Rgb::from_u32(0xF44336),
        AttractionType::Other => DEFAULT_MARKER_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unmapped_type_uses_default_color() {
        assert_eq!(marker_color(AttractionType::Other), DEFAULT_MARKER_COLOR);
    }

    #[test]
    fn mapped_types_have_distinct_non_default_colors() {
        let colors: HashSet<_> = AttractionType::MAPPED
            .iter()
            .map(|kind| marker_color(*kind))
            .collect();
        assert_eq!(colors.len(), AttractionType::MAPPED.len());
        assert!(!colors.contains(&DEFAULT_MARKER_COLOR));
    }
}
