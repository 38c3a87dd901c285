// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        expansion::ArticleExpander,
        ports::time::Clock,
    },
    domain::{
        article::{ArticleId, ArticleReadRepository, ArticleWriteRepository},
        slug::Slug,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) expander: Arc<ArticleExpander>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        expander: Arc<ArticleExpander>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            expander,
            clock,
        }
    }

    /// Advisory slug check for fast feedback; the unique index at the
    /// storage layer stays authoritative, so a lost race still surfaces as
    /// a conflict from the write itself.
    pub(super) async fn ensure_slug_available(
        &self,
        slug: &Slug,
        exclude: Option<ArticleId>,
    ) -> ApplicationResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if exclude != Some(existing.id) => Err(ApplicationError::conflict(
                format!("slug '{slug}' already exists"),
            )),
            _ => Ok(()),
        }
    }
}
