// src/application/queries/taxonomy.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, TagDto},
        error::ApplicationResult,
    },
    domain::taxonomy::{CategoryRepository, TagRepository},
};

pub struct TaxonomyQueryService {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
}

impl TaxonomyQueryService {
    pub fn new(categories: Arc<dyn CategoryRepository>, tags: Arc<dyn TagRepository>) -> Self {
        Self { categories, tags }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tags.list_all().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
