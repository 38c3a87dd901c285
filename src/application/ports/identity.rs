// src/application/ports/identity.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};
use async_trait::async_trait;

/// Session issuance lives in the external identity provider; this port only
/// turns one of its bearer tokens into an actor with a role claim.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
