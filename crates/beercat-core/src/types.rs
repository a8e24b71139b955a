//! Beer record model as received from the catalog endpoint

use serde::{Deserialize, Serialize};

/// A single beer as returned by the data source.
///
/// Read-only: records are stored verbatim and replaced wholesale on load.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BeerRecord {
    /// Unique identifier, used as the stable render key
    pub id: u64,

    /// Display name, also the only field the search matches against
    pub name: String,

    /// Opaque, pre-formatted price string (e.g. "$16.99")
    #[serde(default)]
    pub price: String,

    /// Image URL; absent or empty values fall back to a placeholder
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Aggregated rating data attached to a beer
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Rating {
    #[serde(default)]
    pub average: Option<f64>,

    #[serde(default)]
    pub reviews: Option<u64>,
}

impl BeerRecord {
    pub fn new(id: u64, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
            image: None,
            rating: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_rating(mut self, average: Option<f64>, reviews: Option<u64>) -> Self {
        self.rating = Some(Rating { average, reviews });
        self
    }

    /// Image URL if present and non-empty
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.rating.and_then(|r| r.average)
    }

    pub fn review_count(&self) -> Option<u64> {
        self.rating.and_then(|r| r.reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "id": 1,
            "name": "Amber Ale",
            "price": "$5",
            "image": "u1",
            "rating": {"average": 4.2, "reviews": 10}
        }"#;
        let beer: BeerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(beer.id, 1);
        assert_eq!(beer.name, "Amber Ale");
        assert_eq!(beer.image_url(), Some("u1"));
        assert_eq!(beer.average_rating(), Some(4.2));
        assert_eq!(beer.review_count(), Some(10));
    }

    #[test]
    fn test_parse_record_without_optional_fields() {
        let json = r#"{"id": 2, "name": "Pale Lager"}"#;
        let beer: BeerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(beer.price, "");
        assert!(beer.image.is_none());
        assert!(beer.rating.is_none());
        assert_eq!(beer.average_rating(), None);
    }

    #[test]
    fn test_parse_partial_rating() {
        let json = r#"{"id": 3, "name": "Stout", "price": "$7", "rating": {"reviews": 3}}"#;
        let beer: BeerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(beer.average_rating(), None);
        assert_eq!(beer.review_count(), Some(3));
    }

    #[test]
    fn test_name_is_required() {
        let json = r#"{"id": 4, "price": "$7"}"#;
        assert!(serde_json::from_str::<BeerRecord>(json).is_err());
    }

    #[test]
    fn test_empty_image_treated_as_absent() {
        let beer = BeerRecord::new(5, "Porter", "$6").with_image("");
        assert_eq!(beer.image_url(), None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"id": 6, "name": "IPA", "price": "$8", "brewery": "x"}"#;
        let beer: BeerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(beer.name, "IPA");
    }
}
