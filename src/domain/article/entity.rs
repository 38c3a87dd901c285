// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::bilingual::Bilingual;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::value_objects::{CategoryId, TagId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: Bilingual,
    pub slug: Slug,
    pub excerpt: Bilingual,
    pub content: Bilingual,
    pub cover_image: Option<String>,
    pub gallery: Vec<String>,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub is_featured: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn missing_translation_fields(
    title: &Bilingual,
    excerpt: &Bilingual,
    content: &Bilingual,
) -> Vec<String> {
    let mut fields = Vec::new();
    for (name, value) in [("title", title), ("excerpt", excerpt), ("content", content)] {
        for language in value.missing_languages() {
            fields.push(format!("{name}.{language}"));
        }
    }
    fields
}

impl Article {
    /// Bilingual fields that must be complete before the article may carry
    /// the published status, in `field.language` form.
    pub fn missing_translations(&self) -> Vec<String> {
        missing_translation_fields(&self.title, &self.excerpt, &self.content)
    }

    pub fn ensure_publishable(&self) -> DomainResult<()> {
        let missing = self.missing_translations();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::IncompleteTranslation { fields: missing })
        }
    }

    /// Transition into `published`. Validation runs first so a failing
    /// publish leaves the article untouched. `published_at` falls back to
    /// now; an explicit early publish of a scheduled article overwrites its
    /// future timestamp so the piece actually becomes visible.
    pub fn publish(
        &mut self,
        published_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_publishable()?;
        self.status = ArticleStatus::Published;
        self.published_at = Some(published_at.unwrap_or(now));
        self.updated_at = now;
        Ok(())
    }

    /// Transition into `scheduled`; the timestamp must lie in the future.
    pub fn schedule(&mut self, publish_at: DateTime<Utc>, now: DateTime<Utc>) -> DomainResult<()> {
        if publish_at <= now {
            return Err(DomainError::Validation(
                "scheduled publication time must be in the future".into(),
            ));
        }
        self.status = ArticleStatus::Scheduled;
        self.published_at = Some(publish_at);
        self.updated_at = now;
        Ok(())
    }

    /// Always permitted to an authorized actor; removes public visibility.
    pub fn revert_to_draft(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Draft;
        self.published_at = None;
        self.updated_at = now;
    }

    /// The public visibility predicate. A scheduled article with a past
    /// timestamp stays hidden until explicitly published.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.status == ArticleStatus::Published && self.published_at.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: Bilingual,
    pub slug: Slug,
    pub excerpt: Bilingual,
    pub content: Bilingual,
    pub cover_image: Option<String>,
    pub gallery: Vec<String>,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub is_featured: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn ensure_publishable(&self) -> DomainResult<()> {
        let missing = missing_translation_fields(&self.title, &self.excerpt, &self.content);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::IncompleteTranslation { fields: missing })
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update written through the repository. `None` fields stay
/// untouched; `cover_image` distinguishes "leave alone" from "clear".
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<Bilingual>,
    pub excerpt: Option<Bilingual>,
    pub content: Option<Bilingual>,
    pub slug: Option<Slug>,
    pub cover_image: Option<Option<String>>,
    pub gallery: Option<Vec<String>>,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Option<Vec<TagId>>,
    pub is_featured: Option<bool>,
    pub priority: Option<i32>,
    pub status_change: Option<StatusUpdate>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            excerpt: None,
            content: None,
            slug: None,
            cover_image: None,
            gallery: None,
            category_id: None,
            tag_ids: None,
            is_featured: None,
            priority: None,
            status_change: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: Bilingual) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Bilingual) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: Bilingual) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_cover_image(mut self, cover_image: Option<String>) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    pub fn with_gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = Some(gallery);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(
        mut self,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.status_change = Some(StatusUpdate {
            status,
            published_at,
        });
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
