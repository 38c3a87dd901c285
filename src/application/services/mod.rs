// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, taxonomy::TaxonomyCommandService},
        expansion::ArticleExpander,
        ports::{identity::IdentityResolver, time::Clock},
        queries::{articles::ArticleQueryService, taxonomy::TaxonomyQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleViewCounter, ArticleWriteRepository},
        taxonomy::{CategoryRepository, TagRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
    identity: Arc<dyn IdentityResolver>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        view_counter: Arc<dyn ArticleViewCounter>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        user_repo: Arc<dyn UserRepository>,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let expander = Arc::new(ArticleExpander::new(
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&user_repo),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&expander),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&view_counter),
            Arc::clone(&expander),
            Arc::clone(&clock),
        ));

        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
        ));

        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
        ));

        Self {
            article_commands,
            article_queries,
            taxonomy_commands,
            taxonomy_queries,
            identity,
        }
    }

    pub fn identity(&self) -> Arc<dyn IdentityResolver> {
        Arc::clone(&self.identity)
    }
}
