//! Rental property models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rental property from the properties table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    /// Unique property identifier
    pub id: i64,

    /// Owning user
    pub owner_id: i64,

    /// Listing title
    pub title: String,

    /// Listing description
    pub description: String,

    /// Small photo shown in result lists
    pub thumbnail_photo_url: String,

    /// Large photo shown on the detail page
    pub cover_photo_url: String,

    /// Nightly cost in minor currency units (cents)
    pub cost_per_night: i64,

    /// Street address
    pub street: String,

    /// City
    pub city: String,

    /// Province or state
    pub province: String,

    /// Postal code
    pub post_code: String,

    /// Country
    pub country: String,

    /// Number of parking spaces
    pub parking_spaces: i32,

    /// Number of bathrooms
    pub number_of_bathrooms: i32,

    /// Number of bedrooms
    pub number_of_bedrooms: i32,
}

/// A property row as returned by the search query: the property itself plus
/// the review-rating average computed per query
///
/// `average_rating` is None for properties with no reviews yet; the search
/// joins reviews with a LEFT JOIN so such properties still appear.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyListing {
    /// The property columns
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,

    /// Average review rating, absent when the property has no reviews
    pub average_rating: Option<f64>,
}

/// Input for creating a property listing
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}
