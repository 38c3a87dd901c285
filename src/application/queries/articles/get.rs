// src/application/queries/articles/get.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId},
        slug::Slug,
    },
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.deliver(actor, article).await
    }

    pub async fn get_article_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        // A malformed slug cannot name any article, so it reads as absent
        // rather than invalid.
        let slug = Slug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.deliver(actor, article).await
    }

    /// Anonymous readers only ever see visible articles (hidden ones read
    /// as absent) and each such read bumps the view counter best-effort.
    async fn deliver(
        &self,
        actor: Option<&AuthenticatedUser>,
        article: Article,
    ) -> ApplicationResult<ArticleDto> {
        if actor.is_none() {
            if !article.is_visible(self.clock.now()) {
                return Err(ApplicationError::not_found("article not found"));
            }
            if let Err(err) = self.view_counter.record_view(article.id).await {
                tracing::warn!(article_id = i64::from(article.id), error = %err, "failed to record view");
            }
        }
        self.expander.expand_one(article).await
    }
}
