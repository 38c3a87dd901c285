// src/application/commands/articles/gate.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::policy::Action;

pub(crate) fn ensure_allowed(actor: &AuthenticatedUser, action: Action) -> ApplicationResult<()> {
    if actor.may(action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "role '{}' may not {action} content",
            actor.role
        )))
    }
}
