use crate::dataset::AttractionType;
use crate::prelude::Rgb;
use crate::render::marker_color;

pub const LEGEND_HEADING: &str = "Legend";

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// One entry per mapped category, in table order.
pub fn legend_entries() -> Vec<LegendEntry> {
    AttractionType::MAPPED
        .iter()
        .map(|kind| LegendEntry {
            label: kind.label(),
            color: marker_color(*kind),
        })
        .collect()
}
