//! Positional parameter binding for dynamically composed statements
//!
//! A [`ParamBinder`] is the single owner of the growing value sequence for
//! one statement. Fragment text only ever receives the `$n` token returned
//! by [`ParamBinder::bind`], so every placeholder is paired with exactly one
//! value in append order and no caller-supplied value can reach the text
//! itself.

use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// A single value bound into a statement, in positional order
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<NaiveDate> for BindValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Ordered accumulator of bound values for one statement
///
/// One instance per logical query; placeholders are issued strictly in
/// append order.
#[derive(Debug, Default)]
pub struct ParamBinder {
    values: Vec<BindValue>,
}

impl ParamBinder {
    /// Create an empty binder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and return its 1-based `$n` placeholder token
    pub fn bind(&mut self, value: impl Into<BindValue>) -> String {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }

    /// Number of values bound so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been bound yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The accumulated values, in bind order
    pub fn values(&self) -> &[BindValue] {
        &self.values
    }

    /// Consume the binder, yielding the value sequence
    pub fn into_values(self) -> Vec<BindValue> {
        self.values
    }
}

/// Apply an accumulated value sequence to a query, preserving order
pub(crate) fn bind_values<'q, T>(
    mut query: QueryAs<'q, Postgres, T, PgArguments>,
    values: &[BindValue],
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for value in values {
        query = match value {
            BindValue::Int(v) => query.bind(*v),
            BindValue::Text(v) => query.bind(v.clone()),
            BindValue::Date(v) => query.bind(*v),
        };
    }
    query
}
