//! Shared test utilities for the Staylodge workspace
//!
//! Provides the live-Postgres test harness used by integration tests:
//! optional pool acquisition (tests skip cleanly when no database is
//! reachable), schema bootstrap, and row seeding helpers.

pub mod fixtures;
pub mod postgres;

pub use fixtures::{
    days_from_today, seed_property, seed_reservation, seed_review, seed_user, unique_email,
};
pub use postgres::{apply_schema, try_create_test_pool, try_prepare_test_db};
