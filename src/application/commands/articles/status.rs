// src/application/commands/articles/status.rs
use super::{ArticleCommandService, gate::ensure_allowed};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleStatus, ArticleUpdate},
        policy::Action,
    },
};
use chrono::{DateTime, Utc};

/// Explicit lifecycle transition. Scheduled articles are never promoted by
/// a background job; this command is the only path into `published`.
pub struct SetArticleStatusCommand {
    pub id: i64,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn set_article_status(
        &self,
        actor: &AuthenticatedUser,
        command: SetArticleStatusCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_allowed(actor, Action::Publish)?;

        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.status == command.status && command.published_at.is_none() {
            return self.expander.expand_one(article).await;
        }

        let original_updated_at = article.updated_at;
        let now = self.clock.now();

        match command.status {
            ArticleStatus::Published => article.publish(command.published_at, now)?,
            ArticleStatus::Scheduled => {
                let at = command.published_at.ok_or_else(|| {
                    ApplicationError::validation("scheduled articles require published_at")
                })?;
                article.schedule(at, now)?;
            }
            ArticleStatus::Draft => article.revert_to_draft(now),
        }

        let mut update = ArticleUpdate::new(id, original_updated_at)
            .with_status(article.status, article.published_at);
        update.set_updated_at(article.updated_at);

        let updated = self.write_repo.update(update).await?;
        self.expander.expand_one(updated).await
    }
}
