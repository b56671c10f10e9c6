//! User account model

use serde::Serialize;
use sqlx::FromRow;

/// User account from the users table
///
/// Accounts are immutable once created as far as this layer is concerned;
/// there is no update path. Email uniqueness is case-insensitive, realised
/// by lower-casing at the repository boundary before binding.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address (unique, stored lower-cased)
    pub email: String,

    /// Opaque password hash; never produced by this layer, never serialized
    #[serde(skip_serializing)]
    pub password: String,
}
