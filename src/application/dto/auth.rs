// src/application/dto/auth.rs
use crate::domain::policy::{self, Action};
use crate::domain::user::{Role, UserId};

/// Actor derived from the identity provider's signed claim. The role is
/// trusted verbatim for the policy gate.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub const fn may(&self, action: Action) -> bool {
        policy::authorize(self.role, action)
    }
}
