//! Property repository: filtered search and listing creation

use sqlx::PgPool;

use super::binder::bind_values;
use super::search::{PropertySearchCriteria, PropertySearchQuery};
use super::utils::PROPERTY_COLUMNS;
use crate::error::{DbError, DbResult};
use crate::models::{NewProperty, Property, PropertyListing};

/// Repository for property database operations
#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new PropertyRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search property listings by an arbitrary subset of criteria
    ///
    /// Results carry the per-property review-rating average and are ordered
    /// by ascending nightly cost; rows with equal cost have unspecified
    /// relative order. `limit` defaults to 10.
    pub async fn search(
        &self,
        criteria: &PropertySearchCriteria,
        limit: Option<i64>,
    ) -> DbResult<Vec<PropertyListing>> {
        let query = PropertySearchQuery::build(criteria, limit)?;
        let rows = bind_values(
            sqlx::query_as::<_, PropertyListing>(&query.text),
            &query.values,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Find a property by its unique ID
    pub async fn find_by_id(&self, property_id: i64) -> DbResult<Property> {
        let sql = format!("SELECT {} FROM properties WHERE id = $1", PROPERTY_COLUMNS);
        sqlx::query_as::<_, Property>(&sql)
            .bind(property_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?
            .ok_or_else(|| DbError::not_found("property", property_id))
    }

    /// Create a property listing
    ///
    /// A missing owner surfaces as ConstraintViolation.
    pub async fn create(&self, property: &NewProperty) -> DbResult<Property> {
        let sql = format!(
            r#"
            INSERT INTO properties (
                owner_id, title, description,
                thumbnail_photo_url, cover_photo_url, cost_per_night,
                street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {}
            "#,
            PROPERTY_COLUMNS
        );
        let created = sqlx::query_as::<_, Property>(&sql)
            .bind(property.owner_id)
            .bind(&property.title)
            .bind(&property.description)
            .bind(&property.thumbnail_photo_url)
            .bind(&property.cover_photo_url)
            .bind(property.cost_per_night)
            .bind(&property.street)
            .bind(&property.city)
            .bind(&property.province)
            .bind(&property.post_code)
            .bind(&property.country)
            .bind(property.parking_spaces)
            .bind(property.number_of_bathrooms)
            .bind(property.number_of_bedrooms)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }
}
