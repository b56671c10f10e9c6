//! Staylodge data-access layer
//!
//! Mediates between the application server and the relational store holding
//! users, rental properties, reservations, and reviews. The server layer
//! supplies validated scalar and record inputs; this crate answers with rows
//! or a typed failure. HTTP routing, sessions, and asset serving live
//! upstream; the connection pool is built once at the composition root and
//! injected into each repository.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, DatabaseConfig};
pub use error::{DbError, DbResult};
pub use repositories::{
    PropertyRepository, PropertySearchCriteria, PropertySearchQuery, ReservationRepository,
    ReviewRepository, UserRepository,
};
