//! Row seeding helpers for integration tests
//!
//! Seeds go around the crate under test on purpose: plain INSERTs keep the
//! fixtures independent of the repository code whose behavior the tests
//! assert. Every chain starts from a unique email, so concurrently running
//! tests never collide and no global cleanup is needed.

use chrono::{Duration, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Generate a unique email to avoid cross-test conflicts
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

/// Today shifted by `offset` days, for building past/future stays
pub fn days_from_today(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

/// Insert a user, returning its id
pub async fn seed_user(pool: &PgPool, name: &str, email: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind("$2b$10$not-a-real-hash")
    .fetch_one(pool)
    .await
}

/// Insert a property, returning its id
pub async fn seed_property(
    pool: &PgPool,
    owner_id: i64,
    title: &str,
    city: &str,
    cost_per_night: i64,
) -> sqlx::Result<i64> {
    sqlx::query_scalar(
        r#"
        INSERT INTO properties (
            owner_id, title, description,
            thumbnail_photo_url, cover_photo_url, cost_per_night,
            street, city, province, post_code, country,
            parking_spaces, number_of_bathrooms, number_of_bedrooms
        )
        VALUES ($1, $2, 'seeded for tests', 'https://example.com/thumb.jpg',
                'https://example.com/cover.jpg', $3, '1 Test St', $4, 'BC',
                'V0T 0T0', 'Canada', 1, 1, 2)
        RETURNING id
        "#,
    )
    .bind(owner_id)
    .bind(title)
    .bind(cost_per_night)
    .bind(city)
    .fetch_one(pool)
    .await
}

/// Insert a reservation, returning its id
pub async fn seed_reservation(
    pool: &PgPool,
    property_id: i64,
    guest_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> sqlx::Result<i64> {
    sqlx::query_scalar(
        r#"
        INSERT INTO reservations (start_date, end_date, property_id, guest_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(start_date)
    .bind(end_date)
    .bind(property_id)
    .bind(guest_id)
    .fetch_one(pool)
    .await
}

/// Insert a review, returning its id
pub async fn seed_review(
    pool: &PgPool,
    guest_id: i64,
    property_id: i64,
    reservation_id: i64,
    rating: i32,
    message: &str,
) -> sqlx::Result<i64> {
    sqlx::query_scalar(
        r#"
        INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(reservation_id)
    .bind(rating)
    .bind(message)
    .fetch_one(pool)
    .await
}
