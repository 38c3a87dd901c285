// src/domain/taxonomy/entity.rs
use crate::domain::bilingual::Bilingual;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::value_objects::{CategoryId, TagId};
use chrono::{DateTime, Utc};

/// Editorial section an article belongs to. Names carry both languages;
/// deleting a referenced category is out of scope for this service.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: Bilingual,
    pub slug: Slug,
    pub description: Option<Bilingual>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: Bilingual,
    pub slug: Slug,
    pub description: Option<Bilingual>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: Bilingual,
    pub slug: Slug,
    pub description: Option<Bilingual>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: Bilingual,
    pub slug: Slug,
    pub description: Option<Bilingual>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
