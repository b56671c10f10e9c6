//! Reservation models and the guest-facing joined row

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reservation from the reservations table
///
/// A reservation is "fulfilled" once its end_date has passed and "upcoming"
/// while its start_date is still in the future. The start_date < end_date
/// invariant is enforced by the caller and the schema, not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Reservation {
    /// Unique reservation identifier
    pub id: i64,

    /// First night of the stay
    pub start_date: NaiveDate,

    /// Checkout date
    pub end_date: NaiveDate,

    /// Reserved property
    pub property_id: i64,

    /// Guest holding the reservation
    pub guest_id: i64,
}

/// Input for creating a reservation
#[derive(Debug, Clone, Deserialize)]
pub struct NewReservation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i64,
    pub guest_id: i64,
}

/// Partial update for a reservation: either date independently
///
/// An empty patch is rejected with InvalidArgument rather than silently
/// updating nothing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReservationPatch {
    /// New first night, if changing
    pub start_date: Option<NaiveDate>,

    /// New checkout date, if changing
    pub end_date: Option<NaiveDate>,
}

impl ReservationPatch {
    /// True when the patch carries neither field
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// A reservation joined with its property context, as shown on a guest's
/// trip list
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GuestReservation {
    /// Reservation identifier
    pub id: i64,

    /// First night of the stay
    pub start_date: NaiveDate,

    /// Checkout date
    pub end_date: NaiveDate,

    /// Reserved property
    pub property_id: i64,

    /// Guest holding the reservation
    pub guest_id: i64,

    /// Property listing title
    pub title: String,

    /// Property thumbnail photo
    pub thumbnail_photo_url: String,

    /// Property cover photo
    pub cover_photo_url: String,

    /// Nightly cost in minor currency units
    pub cost_per_night: i64,

    /// Number of parking spaces
    pub parking_spaces: i32,

    /// Number of bathrooms
    pub number_of_bathrooms: i32,

    /// Number of bedrooms
    pub number_of_bedrooms: i32,

    /// Average review rating of the property, if any reviews exist
    pub average_rating: Option<f64>,
}
