// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, Page, PageRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleOrdering, ArticleStatus},
        taxonomy::CategoryId,
    },
};
use std::str::FromStr;

pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub category: Option<i64>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl ArticleQueryService {
    /// One listing path for both consumers. Anonymous callers are pinned to
    /// the visibility predicate inside the engine (their `status` filter is
    /// ignored), so totals and page counts always match the returned items.
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let request = PageRequest::new(query.page, query.page_size)?;

        let status = if actor.is_some() {
            query
                .status
                .as_deref()
                .map(ArticleStatus::from_str)
                .transpose()?
        } else {
            None
        };

        // An unknown (non-positive) category reference matches nothing
        // rather than erroring.
        let category = match query.category {
            Some(id) => match CategoryId::new(id) {
                Ok(id) => Some(id),
                Err(_) => return Ok(Page::new(Vec::new(), 0, &request)),
            },
            None => None,
        };

        let search = query
            .search
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());

        let ordering = match query.order.as_deref() {
            None | Some("latest") => {
                if query.featured == Some(true) {
                    ArticleOrdering::FeaturedRank
                } else {
                    ArticleOrdering::Newest
                }
            }
            Some("views") => ArticleOrdering::MostViewed,
            Some(other) => {
                return Err(ApplicationError::validation(format!(
                    "unknown ordering '{other}'"
                )));
            }
        };

        let filter = ArticleFilter {
            visible_at: if actor.is_none() {
                Some(self.clock.now())
            } else {
                None
            },
            status,
            category,
            search,
            featured: query.featured,
        };

        let (articles, total) = self
            .read_repo
            .list_page(&filter, ordering, request.page_size(), request.offset())
            .await?;

        let items = self.expander.expand_page(articles).await?;
        Ok(Page::new(items, total, &request))
    }
}
