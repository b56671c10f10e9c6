//! Dynamic property-search query composition
//!
//! Callers filter property listings by an arbitrary subset of optional
//! criteria. The statement is assembled from fixed fragments whose
//! placeholders come exclusively from a [`ParamBinder`], so the emitted text
//! and the bound value sequence can never drift apart.
//!
//! Clause layout is fixed regardless of which criteria are present:
//! base SELECT with a LEFT JOIN onto reviews, WHERE-class filters joined by
//! AND, GROUP BY on the property key, an optional HAVING on the rating
//! aggregate (it constrains a computed aggregate and cannot live in WHERE),
//! then ORDER BY ascending cost and a bound LIMIT.

use super::binder::{BindValue, ParamBinder};
use super::utils::{effective_limit, escape_ilike};
use crate::error::DbResult;

/// Optional criteria bundle for a property search
///
/// Every field is independent; any subset (including none) is valid.
#[derive(Debug, Clone, Default)]
pub struct PropertySearchCriteria {
    /// Substring match on the city, case-insensitive
    pub city: Option<String>,

    /// Restrict to properties of one owner
    pub owner_id: Option<i64>,

    /// Lower bound on nightly cost, minor currency units
    pub minimum_price_per_night: Option<i64>,

    /// Upper bound on nightly cost, minor currency units
    pub maximum_price_per_night: Option<i64>,

    /// Lower bound on the average review rating
    pub minimum_rating: Option<i32>,
}

/// A composed property-search statement: text plus its bound values
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearchQuery {
    /// Statement text with `$n` placeholders
    pub text: String,

    /// Values for the placeholders, in order
    pub values: Vec<BindValue>,
}

impl PropertySearchQuery {
    /// Compose the filtered, aggregated listing query
    ///
    /// `limit` defaults to 10 when unset; zero or negative limits fail with
    /// InvalidArgument before any store call.
    pub fn build(criteria: &PropertySearchCriteria, limit: Option<i64>) -> DbResult<Self> {
        let limit = effective_limit(limit)?;

        let mut binder = ParamBinder::new();
        let mut filters: Vec<String> = Vec::new();

        if let Some(city) = &criteria.city {
            // Wildcards wrap the bound value, never the fragment text.
            let pattern = format!("%{}%", escape_ilike(city));
            filters.push(format!("properties.city ILIKE {}", binder.bind(pattern)));
        }
        if let Some(owner_id) = criteria.owner_id {
            filters.push(format!("properties.owner_id = {}", binder.bind(owner_id)));
        }
        if let Some(min_price) = criteria.minimum_price_per_night {
            filters.push(format!(
                "properties.cost_per_night >= {}",
                binder.bind(min_price)
            ));
        }
        if let Some(max_price) = criteria.maximum_price_per_night {
            filters.push(format!(
                "properties.cost_per_night <= {}",
                binder.bind(max_price)
            ));
        }

        let mut text = String::from(
            "SELECT properties.*, \
             avg(property_reviews.rating)::double precision AS average_rating \
             FROM properties \
             LEFT JOIN property_reviews ON property_reviews.property_id = properties.id",
        );

        if !filters.is_empty() {
            text.push_str(" WHERE ");
            text.push_str(&filters.join(" AND "));
        }

        text.push_str(" GROUP BY properties.id");

        if let Some(min_rating) = criteria.minimum_rating {
            text.push_str(&format!(
                " HAVING avg(property_reviews.rating) >= {}",
                binder.bind(min_rating)
            ));
        }

        text.push_str(&format!(
            " ORDER BY properties.cost_per_night ASC LIMIT {}",
            binder.bind(limit)
        ));

        tracing::debug!(
            filters = filters.len(),
            has_rating_filter = criteria.minimum_rating.is_some(),
            params = binder.len(),
            "composed property search"
        );

        Ok(Self {
            text,
            values: binder.into_values(),
        })
    }
}
