// tests/support/memory.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use sangbad_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleOrdering, ArticleReadRepository, ArticleUpdate,
    ArticleViewCounter, ArticleWriteRepository, NewArticle,
};
use sangbad_core::domain::errors::{DomainError, DomainResult};
use sangbad_core::domain::slug::Slug;
use sangbad_core::domain::taxonomy::{
    Category, CategoryId, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository,
};
use sangbad_core::domain::user::{User, UserId, UserRepository};

/// In-memory stand-in for the articles table, including the unique slug
/// constraint and the optimistic concurrency check.
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<i64, Article>>,
    next_id: Mutex<i64>,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        let next_id = articles.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(
                articles
                    .into_iter()
                    .map(|a| (i64::from(a.id), a))
                    .collect(),
            ),
            next_id: Mutex::new(next_id),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    fn matches(article: &Article, filter: &ArticleFilter) -> bool {
        if let Some(now) = filter.visible_at {
            if !article.is_visible(now) {
                return false;
            }
        }
        if let Some(status) = filter.status {
            if article.status != status {
                return false;
            }
        }
        if let Some(category) = filter.category {
            if article.category_id != category {
                return false;
            }
        }
        if let Some(featured) = filter.featured {
            if article.is_featured != featured {
                return false;
            }
        }
        if let Some(search) = filter.search.as_deref() {
            let needle = search.to_lowercase();
            let haystacks = [
                &article.title.en,
                &article.title.bn,
                &article.excerpt.en,
                &article.excerpt.bn,
            ];
            if !haystacks
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        if map.values().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            content: article.content,
            cover_image: article.cover_image,
            gallery: article.gallery,
            category_id: article.category_id,
            tag_ids: article.tag_ids,
            author_id: article.author_id,
            status: article.status,
            published_at: article.published_at,
            views: 0,
            is_featured: article.is_featured,
            priority: article.priority,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();

        if let Some(slug) = &update.slug {
            if map
                .values()
                .any(|a| a.slug == *slug && a.id != update.id)
            {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let article = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(cover_image) = update.cover_image {
            article.cover_image = cover_image;
        }
        if let Some(gallery) = update.gallery {
            article.gallery = gallery;
        }
        if let Some(category_id) = update.category_id {
            article.category_id = category_id;
        }
        if let Some(tag_ids) = update.tag_ids {
            article.tag_ids = tag_ids;
        }
        if let Some(is_featured) = update.is_featured {
            article.is_featured = is_featured;
        }
        if let Some(priority) = update.priority {
            article.priority = priority;
        }
        if let Some(state) = update.status_change {
            article.status = state.status;
            article.published_at = state.published_at;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|a| a.slug == *slug)
            .cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        ordering: ArticleOrdering,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let map = self.inner.lock().unwrap();
        let mut matched: Vec<Article> = map
            .values()
            .filter(|a| Self::matches(a, filter))
            .cloned()
            .collect();

        match ordering {
            ArticleOrdering::Newest => {
                matched.sort_by(|a, b| {
                    b.created_at
                        .cmp(&a.created_at)
                        .then(i64::from(b.id).cmp(&i64::from(a.id)))
                });
            }
            ArticleOrdering::MostViewed => {
                matched.sort_by(|a, b| {
                    b.views
                        .cmp(&a.views)
                        .then(i64::from(b.id).cmp(&i64::from(a.id)))
                });
            }
            ArticleOrdering::FeaturedRank => {
                matched.sort_by(|a, b| {
                    b.priority
                        .cmp(&a.priority)
                        .then(b.created_at.cmp(&a.created_at))
                        .then(i64::from(b.id).cmp(&i64::from(a.id)))
                });
            }
        }

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((items, total))
    }
}

#[async_trait]
impl ArticleViewCounter for InMemoryArticleRepo {
    async fn record_view(&self, id: ArticleId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        if let Some(article) = map.get_mut(&i64::from(id)) {
            article.views += 1;
        }
        Ok(())
    }
}

pub struct InMemoryCategoryRepo {
    inner: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepo {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            inner: Mutex::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut list = self.inner.lock().unwrap();
        if list.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = list.iter().map(|c| i64::from(c.id)).max().unwrap_or(0) + 1;
        let stored = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        list.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == *slug)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        Ok(self.inner.lock().unwrap().clone())
    }
}

pub struct InMemoryTagRepo {
    inner: Mutex<Vec<Tag>>,
}

impl InMemoryTagRepo {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            inner: Mutex::new(tags),
        }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut list = self.inner.lock().unwrap();
        if list.iter().any(|t| t.slug == tag.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = list.iter().map(|t| i64::from(t.id)).max().unwrap_or(0) + 1;
        let stored = Tag {
            id: TagId::new(id)?,
            name: tag.name,
            slug: tag.slug,
            description: tag.description,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        };
        list.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.slug == *slug)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        Ok(self.inner.lock().unwrap().clone())
    }
}

pub struct InMemoryUserRepo {
    inner: Vec<User>,
}

impl InMemoryUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self { inner: users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        Ok(self
            .inner
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}
