// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Role, UserId};
use chrono::{DateTime, Utc};

/// Accounts live in the external identity provider; this side only reads
/// them for author joins and trusts the role claim it is handed.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
