// src/application/commands/articles/update.rs
use super::{ArticleCommandService, gate::ensure_allowed};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleStatus, ArticleUpdate},
        bilingual::Bilingual,
        policy::Action,
        slug::Slug,
        taxonomy::{CategoryId, TagId},
    },
};
use chrono::{DateTime, Utc};

/// Partial update; `None` leaves a field untouched. `cover_image` uses a
/// double option so "absent" and "clear" stay distinguishable.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<Bilingual>,
    pub excerpt: Option<Bilingual>,
    pub content: Option<Bilingual>,
    pub slug: Option<String>,
    pub cover_image: Option<Option<String>>,
    pub gallery: Option<Vec<String>>,
    pub category_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
    pub is_featured: Option<bool>,
    pub priority: Option<i32>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_allowed(actor, Action::Update)?;

        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(id, article.updated_at);
        let now = self.clock.now();

        update = self
            .apply_content_changes(&mut article, &command, update)
            .await?;
        update = Self::apply_metadata_changes(&mut article, &command, update)?;

        if let Some(status) = command.status {
            update = Self::apply_status_change(
                actor,
                &mut article,
                status,
                command.published_at,
                now,
                update,
            )?;
        }

        if Self::is_noop(&update) {
            return self.expander.expand_one(article).await;
        }

        update.set_updated_at(now);
        let updated = self.write_repo.update(update).await?;
        self.expander.expand_one(updated).await
    }

    async fn apply_content_changes(
        &self,
        article: &mut Article,
        command: &UpdateArticleCommand,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        if let Some(title) = &command.title {
            article.title = title.clone().normalized();
            update = update.with_title(article.title.clone());
        }
        if let Some(excerpt) = &command.excerpt {
            article.excerpt = excerpt.clone().normalized();
            update = update.with_excerpt(article.excerpt.clone());
        }
        if let Some(content) = &command.content {
            article.content = content.clone().normalized();
            update = update.with_content(article.content.clone());
        }

        if let Some(raw_slug) = &command.slug {
            let slug = Slug::new(raw_slug.clone())?;
            if slug != article.slug {
                self.ensure_slug_available(&slug, Some(article.id)).await?;
                article.slug = slug.clone();
                update = update.with_slug(slug);
            }
        }

        Ok(update)
    }

    fn apply_metadata_changes(
        article: &mut Article,
        command: &UpdateArticleCommand,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        if let Some(cover_image) = &command.cover_image {
            article.cover_image = cover_image.clone();
            update = update.with_cover_image(cover_image.clone());
        }
        if let Some(gallery) = &command.gallery {
            article.gallery = gallery.clone();
            update = update.with_gallery(gallery.clone());
        }
        if let Some(category_id) = command.category_id {
            let category_id = CategoryId::new(category_id)?;
            article.category_id = category_id;
            update = update.with_category(category_id);
        }
        if let Some(tag_ids) = &command.tag_ids {
            let tag_ids = tag_ids
                .iter()
                .copied()
                .map(TagId::new)
                .collect::<Result<Vec<_>, _>>()?;
            article.tag_ids = tag_ids.clone();
            update = update.with_tags(tag_ids);
        }
        if let Some(is_featured) = command.is_featured {
            article.is_featured = is_featured;
            update = update.with_featured(is_featured);
        }
        if let Some(priority) = command.priority {
            article.priority = priority;
            update = update.with_priority(priority);
        }
        Ok(update)
    }

    fn apply_status_change(
        actor: &AuthenticatedUser,
        article: &mut Article,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        match status {
            ArticleStatus::Published => {
                ensure_allowed(actor, Action::Publish)?;
                article.publish(published_at, now)?;
            }
            ArticleStatus::Scheduled => {
                let at = published_at.ok_or_else(|| {
                    ApplicationError::validation("scheduled articles require published_at")
                })?;
                article.schedule(at, now)?;
            }
            ArticleStatus::Draft => article.revert_to_draft(now),
        }
        Ok(update.with_status(article.status, article.published_at))
    }

    fn is_noop(update: &ArticleUpdate) -> bool {
        update.title.is_none()
            && update.excerpt.is_none()
            && update.content.is_none()
            && update.slug.is_none()
            && update.cover_image.is_none()
            && update.gallery.is_none()
            && update.category_id.is_none()
            && update.tag_ids.is_none()
            && update.is_featured.is_none()
            && update.priority.is_none()
            && update.status_change.is_none()
    }
}
