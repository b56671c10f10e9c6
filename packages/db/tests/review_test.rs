//! Review repository integration tests

use assert_matches::assert_matches;
use sqlx::PgPool;

use staylodge_db::models::{NewReview, RatingInput};
use staylodge_db::{DbError, ReviewRepository};
use staylodge_test_utils::{
    days_from_today, require_db, seed_property, seed_reservation, seed_user, unique_email,
};

/// A fulfilled stay ready for reviewing: (guest_id, property_id, reservation_id)
async fn seed_fulfilled_stay(pool: &PgPool) -> (i64, i64, i64) {
    let owner_id = seed_user(pool, "Review Owner", &unique_email()).await.unwrap();
    let guest_id = seed_user(pool, "Review Guest", &unique_email()).await.unwrap();
    let property_id = seed_property(pool, owner_id, "Gaslight Suite", "Victoria", 9_500)
        .await
        .unwrap();
    let reservation_id = seed_reservation(
        pool,
        property_id,
        guest_id,
        days_from_today(-21),
        days_from_today(-14),
    )
    .await
    .unwrap();
    (guest_id, property_id, reservation_id)
}

#[tokio::test]
async fn test_textual_rating_is_stored_as_integer() {
    require_db!(pool);
    let (guest_id, property_id, reservation_id) = seed_fulfilled_stay(&pool).await;
    let repo = ReviewRepository::new(pool);

    let created = repo
        .create(&NewReview {
            guest_id,
            property_id,
            reservation_id,
            rating: RatingInput::Text("5".to_string()),
            message: "spotless and quiet".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.rating, 5);
    assert_eq!(created.message, "spotless and quiet");
}

#[tokio::test]
async fn test_non_numeric_rating_never_reaches_the_store() {
    require_db!(pool);
    let (guest_id, property_id, reservation_id) = seed_fulfilled_stay(&pool).await;
    let repo = ReviewRepository::new(pool.clone());

    let err = repo
        .create(&NewReview {
            guest_id,
            property_id,
            reservation_id,
            rating: RatingInput::Text("five".to_string()),
            message: "never inserted".to_string(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, DbError::InvalidArgument(_));

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM property_reviews WHERE property_id = $1")
            .bind(property_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_out_of_range_rating_is_constraint_violation() {
    require_db!(pool);
    let (guest_id, property_id, reservation_id) = seed_fulfilled_stay(&pool).await;
    let repo = ReviewRepository::new(pool);

    let err = repo
        .create(&NewReview {
            guest_id,
            property_id,
            reservation_id,
            rating: RatingInput::Number(9),
            message: "off the scale".to_string(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, DbError::ConstraintViolation(_));
}

#[tokio::test]
async fn test_list_for_property_joins_context_and_orders_by_stay() {
    require_db!(pool);
    let (guest_id, property_id, later_stay) = seed_fulfilled_stay(&pool).await;
    let earlier_stay = seed_reservation(
        &pool,
        property_id,
        guest_id,
        days_from_today(-60),
        days_from_today(-53),
    )
    .await
    .unwrap();

    let repo = ReviewRepository::new(pool);
    repo.create(&NewReview {
        guest_id,
        property_id,
        reservation_id: later_stay,
        rating: RatingInput::Number(4),
        message: "second visit".to_string(),
    })
    .await
    .unwrap();
    repo.create(&NewReview {
        guest_id,
        property_id,
        reservation_id: earlier_stay,
        rating: RatingInput::Number(5),
        message: "first visit".to_string(),
    })
    .await
    .unwrap();

    let reviews = repo.list_for_property(property_id).await.unwrap();
    assert_eq!(reviews.len(), 2);
    // Ordered by reservation start_date, not insertion order.
    assert_eq!(reviews[0].message, "first visit");
    assert_eq!(reviews[1].message, "second visit");
    assert_eq!(reviews[0].property_title, "Gaslight Suite");
    assert_eq!(reviews[0].guest_name, "Review Guest");
    assert!(reviews[0].start_date < reviews[1].start_date);
}
