// src/domain/policy.rs
use crate::domain::user::Role;
use std::fmt;

/// Mutating actions subject to the editorial role gate. Reads of published
/// content are open and never pass through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Publish,
    Delete,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Publish => "publish",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single authorization table consulted before every mutation. Authors
/// have no mutation rights over editorial content; deletion is reserved to
/// administrators.
pub const fn authorize(role: Role, action: Action) -> bool {
    match (role, action) {
        (Role::Admin, _) | (Role::Editor, Action::Create | Action::Update | Action::Publish) => {
            true
        }
        (Role::Editor, Action::Delete) | (Role::Author, _) => false,
    }
}
