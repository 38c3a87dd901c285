// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use sangbad_core::application::dto::AuthenticatedUser;
use sangbad_core::application::error::ApplicationError;
use sangbad_core::application::ports::identity::IdentityResolver;
use sangbad_core::application::ports::time::Clock;
use sangbad_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleOrdering, ArticleUpdate, NewArticle,
};
use sangbad_core::domain::errors::{DomainError, DomainResult};
use sangbad_core::domain::slug::Slug;
use sangbad_core::domain::taxonomy::{
    Category, CategoryId, NewCategory, NewTag, Tag, TagId,
};
use sangbad_core::domain::user::{Role, User, UserId};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const AUTHOR_TOKEN: &str = "author-token";

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

#[derive(Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(*FIXED_NOW)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Resolves the three well-known test tokens to actors with the matching
/// role, standing in for the external identity provider.
pub struct StaticIdentityResolver;

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve(&self, token: &str) -> Result<AuthenticatedUser, ApplicationError> {
        let (id, name, role) = match token {
            ADMIN_TOKEN => (1, "admin", Role::Admin),
            EDITOR_TOKEN => (2, "editor", Role::Editor),
            AUTHOR_TOKEN => (3, "author", Role::Author),
            _ => return Err(ApplicationError::unauthorized("invalid token")),
        };
        Ok(AuthenticatedUser {
            id: UserId::new(id).unwrap(),
            name: name.into(),
            role,
        })
    }
}

pub struct DummyArticleWrite;

#[async_trait]
impl sangbad_core::domain::article::ArticleWriteRepository for DummyArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::NotFound("not implemented".into()))
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(DomainError::NotFound("not implemented".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(DomainError::NotFound("article not found".into()))
    }
}

pub struct DummyArticleRead;

#[async_trait]
impl sangbad_core::domain::article::ArticleReadRepository for DummyArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn list_page(
        &self,
        _filter: &ArticleFilter,
        _ordering: ArticleOrdering,
        _limit: u32,
        _offset: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        Ok((vec![], 0))
    }
}

pub struct DummyViewCounter;

#[async_trait]
impl sangbad_core::domain::article::ArticleViewCounter for DummyViewCounter {
    async fn record_view(&self, _id: ArticleId) -> DomainResult<()> {
        Ok(())
    }
}

pub struct DummyCategoryRepo;

#[async_trait]
impl sangbad_core::domain::taxonomy::CategoryRepository for DummyCategoryRepo {
    async fn insert(&self, _category: NewCategory) -> DomainResult<Category> {
        Err(DomainError::NotFound("not implemented".into()))
    }

    async fn find_by_id(&self, _id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(None)
    }

    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(None)
    }

    async fn find_by_ids(&self, _ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        Ok(vec![])
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        Ok(vec![])
    }
}

pub struct DummyTagRepo;

#[async_trait]
impl sangbad_core::domain::taxonomy::TagRepository for DummyTagRepo {
    async fn insert(&self, _tag: NewTag) -> DomainResult<Tag> {
        Err(DomainError::NotFound("not implemented".into()))
    }

    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Tag>> {
        Ok(None)
    }

    async fn find_by_ids(&self, _ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        Ok(vec![])
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        Ok(vec![])
    }
}

pub struct DummyUserRepo;

#[async_trait]
impl sangbad_core::domain::user::UserRepository for DummyUserRepo {
    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_ids(&self, _ids: &[UserId]) -> DomainResult<Vec<User>> {
        Ok(vec![])
    }
}
