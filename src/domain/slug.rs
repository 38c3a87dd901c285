// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// URL-safe unique identifier for a content item. Input is lowercased and
/// trimmed; anything outside `[a-z0-9-]` after normalization is rejected.
/// Slugification of titles is an editor-UI concern, not the server's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value: String = value.into();
        let value = value.trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(DomainError::Validation(
                "slug may only contain a-z, 0-9 and '-'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
