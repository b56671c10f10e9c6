//! Review repository: property review listings and creation

use sqlx::PgPool;

use super::utils::REVIEW_COLUMNS;
use crate::error::DbResult;
use crate::models::{NewReview, PropertyReview, Review};

/// Repository for review database operations
///
/// Reviews are tied to fulfilled reservations by convention; the schema
/// allows duplicates per reservation and this layer does not police them.
#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new ReviewRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all reviews for a property with their reservation dates,
    /// property title, and guest name, oldest stay first
    pub async fn list_for_property(&self, property_id: i64) -> DbResult<Vec<PropertyReview>> {
        let rows = sqlx::query_as::<_, PropertyReview>(
            r#"
            SELECT
                property_reviews.id, property_reviews.guest_id,
                property_reviews.property_id, property_reviews.reservation_id,
                property_reviews.rating, property_reviews.message,
                reservations.start_date, reservations.end_date,
                properties.title AS property_title,
                users.name AS guest_name
            FROM property_reviews
            JOIN reservations ON property_reviews.reservation_id = reservations.id
            JOIN properties ON property_reviews.property_id = properties.id
            JOIN users ON property_reviews.guest_id = users.id
            WHERE property_reviews.property_id = $1
            ORDER BY reservations.start_date ASC
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a review
    ///
    /// The rating is coerced to an integer before the statement is issued;
    /// non-numeric input fails with InvalidArgument and never reaches the
    /// store. Missing guest/property/reservation references surface as
    /// ConstraintViolation.
    pub async fn create(&self, review: &NewReview) -> DbResult<Review> {
        let rating = review.rating.coerce()?;

        let sql = format!(
            r#"
            INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            REVIEW_COLUMNS
        );
        let created = sqlx::query_as::<_, Review>(&sql)
            .bind(review.guest_id)
            .bind(review.property_id)
            .bind(review.reservation_id)
            .bind(rating)
            .bind(&review.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }
}
