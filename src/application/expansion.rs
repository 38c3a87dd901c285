// src/application/expansion.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::{ArticleDto, AuthorRefDto, CategoryRefDto, TagRefDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Article;
use crate::domain::taxonomy::{CategoryRepository, TagRepository};
use crate::domain::user::UserRepository;

/// Explicit expansion step of the read path: joins each article with its
/// category's and tags' bilingual name/slug and the author's name, so
/// callers receive self-contained records instead of bare references.
pub struct ArticleExpander {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
    users: Arc<dyn UserRepository>,
}

impl ArticleExpander {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            categories,
            tags,
            users,
        }
    }

    pub async fn expand_one(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let mut expanded = self.expand_page(vec![article]).await?;
        expanded
            .pop()
            .ok_or_else(|| ApplicationError::infrastructure("article expansion produced no record"))
    }

    pub async fn expand_page(&self, articles: Vec<Article>) -> ApplicationResult<Vec<ArticleDto>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let mut category_ids: Vec<_> = articles.iter().map(|a| a.category_id).collect();
        category_ids.sort_unstable_by_key(|id| i64::from(*id));
        category_ids.dedup();

        let mut tag_ids: Vec<_> = articles.iter().flat_map(|a| a.tag_ids.clone()).collect();
        tag_ids.sort_unstable_by_key(|id| i64::from(*id));
        tag_ids.dedup();

        let mut author_ids: Vec<_> = articles.iter().map(|a| a.author_id).collect();
        author_ids.sort_unstable_by_key(|id| i64::from(*id));
        author_ids.dedup();

        let categories: HashMap<i64, _> = self
            .categories
            .find_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id.into(), c))
            .collect();
        let tags: HashMap<i64, _> = self
            .tags
            .find_by_ids(&tag_ids)
            .await?
            .into_iter()
            .map(|t| (t.id.into(), t))
            .collect();
        let authors: HashMap<i64, _> = self
            .users
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id.into(), u))
            .collect();

        articles
            .into_iter()
            .map(|article| {
                let category = categories.get(&i64::from(article.category_id)).ok_or_else(
                    || ApplicationError::infrastructure("article references a missing category"),
                )?;
                let author = authors
                    .get(&i64::from(article.author_id))
                    .ok_or_else(|| {
                        ApplicationError::infrastructure("article references a missing author")
                    })?;
                // A tag deleted out from under an article is dropped from the
                // view rather than failing the whole page.
                let article_tags: Vec<TagRefDto> = article
                    .tag_ids
                    .iter()
                    .filter_map(|id| tags.get(&i64::from(*id)))
                    .map(TagRefDto::from)
                    .collect();

                Ok(ArticleDto {
                    id: article.id.into(),
                    title: article.title,
                    slug: article.slug.into(),
                    excerpt: article.excerpt,
                    content: article.content,
                    cover_image: article.cover_image,
                    gallery: article.gallery,
                    category: CategoryRefDto::from(category),
                    tags: article_tags,
                    author: AuthorRefDto::from(author),
                    status: article.status,
                    published_at: article.published_at,
                    views: article.views,
                    is_featured: article.is_featured,
                    priority: article.priority,
                    created_at: article.created_at,
                    updated_at: article.updated_at,
                })
            })
            .collect()
    }
}
