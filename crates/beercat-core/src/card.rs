//! Card presentation for a single beer
//!
//! Turns a [`BeerRecord`] into the display strings shown on its card. Zero
//! values are treated like missing ones: a 0.0 average reads "N/A" and a
//! review count of 0 reads "No reviews yet".

use crate::types::BeerRecord;

/// Placeholder image shown when a record has no image or its image failed
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/api/placeholder/150/200";

pub const NO_RATING: &str = "N/A";
pub const NO_REVIEWS: &str = "No reviews yet";

/// Where a card's image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// The record's own image URL
    Remote(&'a str),
    /// The placeholder, because the image is absent or failed to load
    Placeholder(&'a str),
}

impl<'a> ImageSource<'a> {
    pub fn url(&self) -> &'a str {
        match self {
            ImageSource::Remote(url) | ImageSource::Placeholder(url) => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder(_))
    }
}

/// Display strings for one beer card
#[derive(Debug, Clone, PartialEq)]
pub struct BeerCard<'a> {
    pub id: u64,
    pub name: &'a str,
    pub price: &'a str,
    pub image: ImageSource<'a>,
    /// Average to one decimal place, or "N/A"
    pub rating: String,
    /// "N reviews", or "No reviews yet"
    pub reviews: String,
}

impl<'a> BeerCard<'a> {
    /// Build the card for `beer`.
    ///
    /// `image_failed` marks a record whose image already failed once; the
    /// placeholder is then used and never substituted again.
    pub fn new(beer: &'a BeerRecord, image_failed: bool, placeholder: &'a str) -> Self {
        let image = match beer.image_url() {
            Some(url) if !image_failed => ImageSource::Remote(url),
            _ => ImageSource::Placeholder(placeholder),
        };

        Self {
            id: beer.id,
            name: &beer.name,
            price: &beer.price,
            image,
            rating: rating_label(beer.average_rating()),
            reviews: reviews_label(beer.review_count()),
        }
    }

    /// Combined form, e.g. "4.2 (10 reviews)" or "N/A (No reviews yet)"
    pub fn rating_summary(&self) -> String {
        format!("{} ({})", self.rating, self.reviews)
    }
}

/// Format an average rating to one decimal place
pub fn rating_label(average: Option<f64>) -> String {
    match average {
        Some(avg) if avg != 0.0 && avg.is_finite() => format!("{avg:.1}"),
        _ => NO_RATING.to_string(),
    }
}

/// Format a review count
pub fn reviews_label(reviews: Option<u64>) -> String {
    match reviews {
        Some(n) if n > 0 => format!("{n} reviews"),
        _ => NO_REVIEWS.to_string(),
    }
}
