//! Reservation repository: lifecycle operations and the guest trip buckets

use sqlx::PgPool;

use super::binder::{bind_values, BindValue, ParamBinder};
use super::utils::{effective_limit, RESERVATION_COLUMNS};
use crate::error::{DbError, DbResult};
use crate::models::{GuestReservation, NewReservation, Reservation, ReservationPatch};

/// Fixed date predicates for the two trip buckets. A reservation is never in
/// both: fulfilled stays ended before today, upcoming ones start after it.
const FULFILLED_PREDICATE: &str = "reservations.end_date < CURRENT_DATE";
const UPCOMING_PREDICATE: &str = "reservations.start_date > CURRENT_DATE";

/// Repository for reservation database operations
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new ReservationRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a reservation
    ///
    /// A missing property or guest surfaces as ConstraintViolation. The
    /// start_date < end_date invariant is the caller's and the schema's to
    /// enforce.
    pub async fn create(&self, reservation: &NewReservation) -> DbResult<Reservation> {
        let sql = format!(
            r#"
            INSERT INTO reservations (start_date, end_date, property_id, guest_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            RESERVATION_COLUMNS
        );
        let created = sqlx::query_as::<_, Reservation>(&sql)
            .bind(reservation.start_date)
            .bind(reservation.end_date)
            .bind(reservation.property_id)
            .bind(reservation.guest_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    /// Find a reservation by its unique ID
    pub async fn find_by_id(&self, reservation_id: i64) -> DbResult<Reservation> {
        let sql = format!(
            "SELECT {} FROM reservations WHERE id = $1",
            RESERVATION_COLUMNS
        );
        sqlx::query_as::<_, Reservation>(&sql)
            .bind(reservation_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?
            .ok_or_else(|| DbError::not_found("reservation", reservation_id))
    }

    /// List a guest's fulfilled reservations: stays whose end_date has
    /// already passed, oldest first
    pub async fn list_fulfilled(
        &self,
        guest_id: i64,
        limit: Option<i64>,
    ) -> DbResult<Vec<GuestReservation>> {
        self.list_for_guest(guest_id, FULFILLED_PREDICATE, limit)
            .await
    }

    /// List a guest's upcoming reservations: stays whose start_date is still
    /// in the future, soonest first
    pub async fn list_upcoming(
        &self,
        guest_id: i64,
        limit: Option<i64>,
    ) -> DbResult<Vec<GuestReservation>> {
        self.list_for_guest(guest_id, UPCOMING_PREDICATE, limit)
            .await
    }

    /// Partially update a reservation's dates
    ///
    /// Each date is written independently; an empty patch fails with
    /// InvalidArgument rather than silently updating nothing, and a missing
    /// row fails with NotFound.
    pub async fn update(
        &self,
        reservation_id: i64,
        patch: &ReservationPatch,
    ) -> DbResult<Reservation> {
        let (sql, values) = build_update_statement(reservation_id, patch)?;
        bind_values(sqlx::query_as::<_, Reservation>(&sql), &values)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?
            .ok_or_else(|| DbError::not_found("reservation", reservation_id))
    }

    /// Delete a reservation and any review attached to it
    ///
    /// The cascade is a single statement, so the pair can never be removed
    /// half-way. Deleting a missing reservation fails with NotFound.
    pub async fn delete(&self, reservation_id: i64) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            WITH removed_reviews AS (
                DELETE FROM property_reviews WHERE reservation_id = $1
            )
            DELETE FROM reservations WHERE id = $1
            "#,
        )
        .bind(reservation_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("reservation", reservation_id));
        }
        Ok(())
    }

    /// Shared shape of the two trip buckets: reservation columns joined with
    /// property context and the property's review-rating average
    async fn list_for_guest(
        &self,
        guest_id: i64,
        date_predicate: &'static str,
        limit: Option<i64>,
    ) -> DbResult<Vec<GuestReservation>> {
        let limit = effective_limit(limit)?;
        let sql = format!(
            r#"
            SELECT
                reservations.id, reservations.start_date, reservations.end_date,
                reservations.property_id, reservations.guest_id,
                properties.title, properties.thumbnail_photo_url,
                properties.cover_photo_url, properties.cost_per_night,
                properties.parking_spaces, properties.number_of_bathrooms,
                properties.number_of_bedrooms,
                avg(property_reviews.rating)::double precision AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE reservations.guest_id = $1
                AND {}
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date ASC
            LIMIT $2
            "#,
            date_predicate
        );
        let rows = sqlx::query_as::<_, GuestReservation>(&sql)
            .bind(guest_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// Compose the dynamic UPDATE for a date patch
///
/// Both date fields go through the same assignment path, so every patch
/// combination yields the same statement shape.
fn build_update_statement(
    reservation_id: i64,
    patch: &ReservationPatch,
) -> DbResult<(String, Vec<BindValue>)> {
    if patch.is_empty() {
        return Err(DbError::invalid_argument(
            "reservation update requires start_date or end_date",
        ));
    }

    let mut binder = ParamBinder::new();
    let mut assignments: Vec<String> = Vec::new();

    if let Some(start_date) = patch.start_date {
        assignments.push(format!("start_date = {}", binder.bind(start_date)));
    }
    if let Some(end_date) = patch.end_date {
        assignments.push(format!("end_date = {}", binder.bind(end_date)));
    }

    let sql = format!(
        "UPDATE reservations SET {} WHERE id = {} RETURNING {}",
        assignments.join(", "),
        binder.bind(reservation_id),
        RESERVATION_COLUMNS
    );
    Ok((sql, binder.into_values()))
}
