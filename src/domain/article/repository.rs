// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::taxonomy::value_objects::CategoryId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Listing conditions, combined with logical AND. `visible_at` carries the
/// public caller's "now": when set, only articles passing the visibility
/// predicate at that instant are matched (and counted), regardless of any
/// `status` filter the caller asked for.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub visible_at: Option<DateTime<Utc>>,
    pub status: Option<ArticleStatus>,
    pub category: Option<CategoryId>,
    pub search: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleOrdering {
    /// `created_at DESC, id DESC` — the id tie-break keeps pagination
    /// deterministic when creation times collide.
    #[default]
    Newest,
    /// `views DESC, id DESC` — the trending sidebar.
    MostViewed,
    /// `priority DESC, created_at DESC, id DESC` — front-page featured rank.
    FeaturedRank,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>>;
    /// Returns one page plus the total count under the same conditions, so
    /// `total`/`page_count` always agree with `items`.
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        ordering: ArticleOrdering,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Article>, u64)>;
}

/// Best-effort view counting: increments may be lost under concurrency and
/// failures must never fail the read that triggered them.
#[async_trait]
pub trait ArticleViewCounter: Send + Sync {
    async fn record_view(&self, id: ArticleId) -> DomainResult<()>;
}
