// src/application/dto/articles.rs
use crate::domain::article::ArticleStatus;
use crate::domain::bilingual::Bilingual;
use crate::domain::taxonomy::{Category, Tag};
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Self-contained article record: category, tags and author are expanded
/// engine-side so callers never chase references.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: Bilingual,
    pub slug: String,
    pub excerpt: Bilingual,
    pub content: Bilingual,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub gallery: Vec<String>,
    pub category: CategoryRefDto,
    pub tags: Vec<TagRefDto>,
    pub author: AuthorRefDto,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub is_featured: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryRefDto {
    pub id: i64,
    pub name: Bilingual,
    pub slug: String,
}

impl From<&Category> for CategoryRefDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.clone(),
            slug: category.slug.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagRefDto {
    pub id: i64,
    pub name: Bilingual,
    pub slug: String,
}

impl From<&Tag> for TagRefDto {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.clone(),
            slug: tag.slug.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorRefDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for AuthorRefDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
