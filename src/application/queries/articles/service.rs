// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{expansion::ArticleExpander, ports::time::Clock},
    domain::article::{ArticleReadRepository, ArticleViewCounter},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) view_counter: Arc<dyn ArticleViewCounter>,
    pub(super) expander: Arc<ArticleExpander>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        view_counter: Arc<dyn ArticleViewCounter>,
        expander: Arc<ArticleExpander>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            view_counter,
            expander,
            clock,
        }
    }
}
