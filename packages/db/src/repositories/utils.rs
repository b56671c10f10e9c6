//! Shared utility functions and column lists for repositories

use crate::error::{DbError, DbResult};

/// Default page size for listing queries
pub const DEFAULT_LIMIT: i64 = 10;

/// Resolve an optional caller-supplied limit against the default
///
/// A limit is always bound as a parameter, so it must be validated here;
/// zero or negative values are rejected before any store round-trip.
pub(crate) fn effective_limit(limit: Option<i64>) -> DbResult<i64> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if limit <= 0 {
        return Err(DbError::invalid_argument(format!(
            "limit must be a positive integer, got {}",
            limit
        )));
    }
    Ok(limit)
}

/// Escape special characters in ILIKE patterns to prevent pattern injection.
///
/// ILIKE uses `%` for any sequence and `_` for single character wildcards.
/// If user input contains these characters, they must be escaped to match
/// literally.
pub fn escape_ilike(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

// ============================================================================
// SQL Column Constants
//
// These constants define the SELECT/RETURNING column lists for each entity
// type, reducing duplication and ensuring consistency across queries.
// ============================================================================

/// SQL columns for user queries
pub const USER_COLUMNS: &str = "id, name, email, password";

/// SQL columns for property queries
pub const PROPERTY_COLUMNS: &str = r#"
    id, owner_id, title, description,
    thumbnail_photo_url, cover_photo_url, cost_per_night,
    street, city, province, post_code, country,
    parking_spaces, number_of_bathrooms, number_of_bedrooms
"#;

/// SQL columns for reservation queries
pub const RESERVATION_COLUMNS: &str = "id, start_date, end_date, property_id, guest_id";

/// SQL columns for review queries
pub const REVIEW_COLUMNS: &str = "id, guest_id, property_id, reservation_id, rating, message";

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_effective_limit_defaults_to_ten() {
        assert_eq!(effective_limit(None).unwrap(), 10);
        assert_eq!(effective_limit(Some(25)).unwrap(), 25);
    }

    #[test]
    fn test_effective_limit_rejects_non_positive() {
        assert_matches!(effective_limit(Some(0)), Err(DbError::InvalidArgument(_)));
        assert_matches!(effective_limit(Some(-3)), Err(DbError::InvalidArgument(_)));
    }

    #[test]
    fn test_escape_ilike_no_special_chars() {
        assert_eq!(escape_ilike("Vancouver"), "Vancouver");
    }

    #[test]
    fn test_escape_ilike_percent() {
        assert_eq!(escape_ilike("100% beachfront"), r"100\% beachfront");
    }

    #[test]
    fn test_escape_ilike_underscore() {
        assert_eq!(escape_ilike("north_shore"), r"north\_shore");
    }

    #[test]
    fn test_escape_ilike_backslash() {
        assert_eq!(escape_ilike(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_escape_ilike_empty() {
        assert_eq!(escape_ilike(""), "");
    }
}
