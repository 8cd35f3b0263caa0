use crate::dataset::{Attraction, AttractionId, Review};

pub const MAX_REVIEWS: usize = 3;
pub const MAX_PHOTOS: usize = 3;
pub const NO_REVIEWS: &str = "No reviews yet";

/// Filled stars out of five for a fractional rating: rounded, then clamped.
pub fn rating_stars(rating: f64) -> u8 {
    rating.round().clamp(0.0, 5.0) as u8
}

/// Per-position fill of a five-star widget.
pub fn star_row(filled: u8) -> [bool; 5] {
    std::array::from_fn(|index| (index as u8) < filled)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub author: String,
    /// Review ratings are already whole stars and are shown unrounded.
    pub stars: u8,
    pub text: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            author: review.author.clone(),
            stars: review.rating.min(5),
            text: review.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsSection {
    Reviews(Vec<ReviewView>),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoView {
    pub source: String,
    pub alt: String,
}

impl PhotoView {
    /// Whether the source must be downloaded rather than read from disk.
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("https://") || self.source.starts_with("http://")
    }
}

/// Everything the details panel shows for one attraction.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub id: AttractionId,
    pub name: String,
    pub type_label: String,
    pub description: String,
    pub stars: u8,
    pub rating_text: String,
    pub is_open: bool,
    pub weekday_text: Vec<String>,
    pub reviews: ReviewsSection,
    /// Empty means the photo strip is not shown at all.
    pub photos: Vec<PhotoView>,
}

impl DetailsView {
    pub fn new(attraction: &Attraction) -> Self {
        let reviews = if attraction.reviews.is_empty() {
            ReviewsSection::Placeholder(NO_REVIEWS)
        } else {
            ReviewsSection::Reviews(
                attraction
                    .reviews
                    .iter()
                    .take(MAX_REVIEWS)
                    .map(ReviewView::from)
                    .collect(),
            )
        };

        let photos = attraction
            .photos
            .iter()
            .take(MAX_PHOTOS)
            .enumerate()
            .map(|(index, source)| PhotoView {
                source: source.clone(),
                alt: format!("{} {}", attraction.name, index + 1),
            })
            .collect();

        Self {
            id: attraction.id.clone(),
            name: attraction.name.clone(),
            type_label: attraction.kind.label(),
            description: attraction.description.clone(),
            stars: rating_stars(attraction.rating),
            rating_text: format!("{:.1}", attraction.rating),
            is_open: attraction.is_open(),
            weekday_text: attraction.opening_hours.weekday_text.clone(),
            reviews,
            photos,
        }
    }

    pub fn status_text(&self) -> &'static str {
        if self.is_open {
            "Open Now"
        } else {
            "Closed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AttractionId, Dataset};

    fn details(id: &str) -> DetailsView {
        let dataset = Dataset::melbourne();
        DetailsView::new(dataset.attraction(&AttractionId::new(id)).unwrap())
    }

    #[test]
    fn rating_rounds_to_nearest_star() {
        assert_eq!(rating_stars(3.7), 4);
        assert_eq!(rating_stars(3.4), 3);
        assert_eq!(rating_stars(2.5), 3);
        assert_eq!(rating_stars(0.2), 0);
        assert_eq!(rating_stars(7.0), 5);
        assert_eq!(star_row(4), [true, true, true, true, false]);
    }

    #[test]
    fn caps_reviews_and_photos_at_three() {
        let view = details("ngv-international");
        match &view.reviews {
            ReviewsSection::Reviews(reviews) => {
                assert_eq!(reviews.len(), 3);
                assert_eq!(reviews[0].author, "Grace L.");
                assert_eq!(reviews[2].author, "Ella M.");
            }
            other => panic!("unexpected section {:?}", other),
        }
        assert_eq!(view.photos.len(), 3);
        assert_eq!(view.photos[2].alt, "NGV International 3");
        assert!(view.photos.iter().all(PhotoView::is_remote));
    }

    #[test]
    fn missing_reviews_and_photos_use_placeholders() {
        let view = details("fitzroy-gardens");
        assert_eq!(view.reviews, ReviewsSection::Placeholder("No reviews yet"));
        assert!(view.photos.is_empty());
    }

    #[test]
    fn header_fields_follow_attraction() {
        let view = details("hosier-lane");
        assert_eq!(view.type_label, "street art");
        assert_eq!(view.rating_text, "4.3");
        assert_eq!(view.stars, 4);
        assert_eq!(view.status_text(), "Open Now");
        assert_eq!(view.weekday_text.len(), 7);

        let closed = details("old-melbourne-gaol");
        assert_eq!(closed.status_text(), "Closed");
        assert_eq!(closed.stars, 3);
    }

    #[test]
    fn review_stars_are_not_rounded() {
        let view = details("sea-life-melbourne");
        assert_eq!(view.stars, 4);
        match view.reviews {
            ReviewsSection::Reviews(reviews) => {
                assert_eq!(reviews[0].stars, 4);
                assert_eq!(reviews[1].stars, 3);
            }
            other => panic!("unexpected section {:?}", other),
        }
    }
}
