// src/application/commands/articles/create.rs
use super::{ArticleCommandService, gate::ensure_allowed};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleStatus, NewArticle},
        bilingual::Bilingual,
        policy::Action,
        slug::Slug,
        taxonomy::{CategoryId, TagId},
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: Bilingual,
    pub slug: String,
    pub excerpt: Bilingual,
    pub content: Bilingual,
    pub cover_image: Option<String>,
    pub gallery: Vec<String>,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_featured: bool,
    pub priority: i32,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_allowed(actor, Action::Create)?;

        let slug = Slug::new(command.slug)?;
        let category_id = CategoryId::new(command.category_id)?;
        let tag_ids = command
            .tag_ids
            .into_iter()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let status = command.status.unwrap_or(ArticleStatus::Draft);
        let now = self.clock.now();

        if status == ArticleStatus::Published {
            ensure_allowed(actor, Action::Publish)?;
        }

        let published_at = match status {
            ArticleStatus::Draft => None,
            ArticleStatus::Published => Some(command.published_at.unwrap_or(now)),
            ArticleStatus::Scheduled => {
                let at = command.published_at.ok_or_else(|| {
                    ApplicationError::validation("scheduled articles require published_at")
                })?;
                if at <= now {
                    return Err(ApplicationError::validation(
                        "scheduled publication time must be in the future",
                    ));
                }
                Some(at)
            }
        };

        let new_article = NewArticle {
            title: command.title.normalized(),
            slug,
            excerpt: command.excerpt.normalized(),
            content: command.content.normalized(),
            cover_image: command.cover_image,
            gallery: command.gallery,
            category_id,
            tag_ids,
            author_id: actor.id,
            status,
            published_at,
            is_featured: command.is_featured,
            priority: command.priority,
            created_at: now,
            updated_at: now,
        };

        if status == ArticleStatus::Published {
            new_article.ensure_publishable()?;
        }

        self.ensure_slug_available(&new_article.slug, None).await?;

        let created = self.write_repo.insert(new_article).await?;
        self.expander.expand_one(created).await
    }
}
