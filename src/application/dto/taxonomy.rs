// src/application/dto/taxonomy.rs
use crate::domain::bilingual::Bilingual;
use crate::domain::taxonomy::{Category, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: Bilingual,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Bilingual>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
            slug: category.slug.into(),
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub name: Bilingual,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Bilingual>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name,
            slug: tag.slug.into(),
            description: tag.description,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}
