// tests/support/builders.rs
use chrono::{DateTime, Utc};

use sangbad_core::domain::article::{Article, ArticleId, ArticleStatus};
use sangbad_core::domain::bilingual::Bilingual;
use sangbad_core::domain::slug::Slug;
use sangbad_core::domain::taxonomy::{Category, CategoryId, Tag, TagId};
use sangbad_core::domain::user::{Role, User, UserId};

use super::mocks::FIXED_NOW;

pub struct ArticleBuilder {
    id: i64,
    title: Bilingual,
    slug: String,
    excerpt: Bilingual,
    content: Bilingual,
    category_id: i64,
    tag_ids: Vec<i64>,
    author_id: i64,
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
    views: i64,
    is_featured: bool,
    priority: i32,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: Bilingual::new("Test Article", "পরীক্ষামূলক নিবন্ধ"),
            slug: "test-article".into(),
            excerpt: Bilingual::new("Test excerpt", "পরীক্ষামূলক সারাংশ"),
            content: Bilingual::new("Test body", "পরীক্ষামূলক বিষয়বস্তু"),
            category_id: 1,
            tag_ids: Vec::new(),
            author_id: 1,
            status: ArticleStatus::Draft,
            published_at: None,
            views: 0,
            is_featured: false,
            priority: 0,
            created_at: *FIXED_NOW,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, en: &str, bn: &str) -> Self {
        self.title = Bilingual::new(en, bn);
        self
    }

    pub fn excerpt(mut self, en: &str, bn: &str) -> Self {
        self.excerpt = Bilingual::new(en, bn);
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn tags(mut self, tag_ids: Vec<i64>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(at);
        self
    }

    pub fn scheduled(mut self, at: DateTime<Utc>) -> Self {
        self.status = ArticleStatus::Scheduled;
        self.published_at = Some(at);
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn featured(mut self, priority: i32) -> Self {
        self.is_featured = true;
        self.priority = priority;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: self.title,
            slug: Slug::new(self.slug).unwrap(),
            excerpt: self.excerpt,
            content: self.content,
            cover_image: None,
            gallery: Vec::new(),
            category_id: CategoryId::new(self.category_id).unwrap(),
            tag_ids: self
                .tag_ids
                .into_iter()
                .map(|id| TagId::new(id).unwrap())
                .collect(),
            author_id: UserId::new(self.author_id).unwrap(),
            status: self.status,
            published_at: self.published_at,
            views: self.views,
            is_featured: self.is_featured,
            priority: self.priority,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn category(id: i64, slug: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: Bilingual::new(slug, format!("{slug}-bn")),
        slug: Slug::new(slug).unwrap(),
        description: None,
        created_at: *FIXED_NOW,
        updated_at: *FIXED_NOW,
    }
}

pub fn tag(id: i64, slug: &str) -> Tag {
    Tag {
        id: TagId::new(id).unwrap(),
        name: Bilingual::new(slug, format!("{slug}-bn")),
        slug: Slug::new(slug).unwrap(),
        description: None,
        created_at: *FIXED_NOW,
        updated_at: *FIXED_NOW,
    }
}

pub fn user(id: i64, name: &str, role: Role) -> User {
    User {
        id: UserId::new(id).unwrap(),
        name: name.into(),
        email: format!("{name}@example.com"),
        role,
        created_at: *FIXED_NOW,
    }
}
