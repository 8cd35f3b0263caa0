pub mod controls;
pub mod details;
pub mod legend;

pub use controls::{route_list_clicked, ControlsView, RouteListItem};
pub use details::{rating_stars, star_row, DetailsView, PhotoView, ReviewView, ReviewsSection};
pub use legend::{legend_entries, LegendEntry};
