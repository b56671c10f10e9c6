//! Review models and rating input coercion

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{DbError, DbResult};

/// Review from the property_reviews table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Review {
    /// Unique review identifier
    pub id: i64,

    /// Reviewing guest
    pub guest_id: i64,

    /// Reviewed property
    pub property_id: i64,

    /// The fulfilled reservation this review is tied to
    pub reservation_id: i64,

    /// Star rating, 1 through 5
    pub rating: i32,

    /// Free-form review text
    pub message: String,
}

/// A rating as submitted by a client
///
/// HTML forms post ratings as text while JSON clients send numbers; both
/// shapes deserialize here and are coerced to an integer before any
/// statement is issued.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Number(i64),
    Text(String),
}

impl RatingInput {
    /// Coerce to the integer the store expects
    ///
    /// Non-numeric text fails with InvalidArgument; the 1-5 range is a
    /// schema constraint and surfaces as ConstraintViolation if violated.
    pub fn coerce(&self) -> DbResult<i32> {
        match self {
            Self::Number(n) => i32::try_from(*n)
                .map_err(|_| DbError::invalid_argument(format!("rating out of range: {}", n))),
            Self::Text(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| DbError::invalid_argument(format!("non-numeric rating: {:?}", raw))),
        }
    }
}

impl From<i32> for RatingInput {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

/// Input for creating a review
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub guest_id: i64,
    pub property_id: i64,
    pub reservation_id: i64,
    pub rating: RatingInput,
    pub message: String,
}

/// A review joined with its reservation dates, property title, and guest
/// name, as shown on a property's review list
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyReview {
    /// Review identifier
    pub id: i64,

    /// Reviewing guest
    pub guest_id: i64,

    /// Reviewed property
    pub property_id: i64,

    /// Reservation the review is tied to
    pub reservation_id: i64,

    /// Star rating, 1 through 5
    pub rating: i32,

    /// Free-form review text
    pub message: String,

    /// First night of the reviewed stay
    pub start_date: NaiveDate,

    /// Checkout date of the reviewed stay
    pub end_date: NaiveDate,

    /// Title of the reviewed property
    pub property_title: String,

    /// Display name of the reviewing guest
    pub guest_name: String,
}
