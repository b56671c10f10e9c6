//! Database repository layer for Staylodge
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. Each repository holds an injected
//! connection pool and issues one round-trip per call; no connection is held
//! across calls and no retry happens here. Every operation resolves to a
//! value or a typed [`crate::error::DbError`], never a raw store error and
//! never a silently swallowed one.

pub mod binder;
pub mod property;
pub mod reservation;
pub mod review;
pub mod search;
pub mod user;
pub mod utils;

pub use binder::{BindValue, ParamBinder};
pub use property::PropertyRepository;
pub use reservation::ReservationRepository;
pub use review::ReviewRepository;
pub use search::{PropertySearchCriteria, PropertySearchQuery};
pub use user::UserRepository;
