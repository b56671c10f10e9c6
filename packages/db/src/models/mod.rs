//! Database models for Staylodge
//!
//! SQLx row types and their insert/patch companions for:
//! - Users (hosts and guests)
//! - Rental properties and their search listings
//! - Reservations and the fulfilled/upcoming buckets
//! - Property reviews

pub mod property;
pub mod reservation;
pub mod review;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{GuestReservation, NewReservation, Reservation, ReservationPatch};
pub use review::{NewReview, PropertyReview, RatingInput, Review};
pub use user::User;
