// src/application/commands/taxonomy.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::gate::ensure_allowed,
        dto::{AuthenticatedUser, CategoryDto, TagDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        bilingual::Bilingual,
        policy::Action,
        slug::Slug,
        taxonomy::{CategoryRepository, NewCategory, NewTag, TagRepository},
    },
};

pub struct CreateCategoryCommand {
    pub name: Bilingual,
    pub slug: String,
    pub description: Option<Bilingual>,
}

pub struct CreateTagCommand {
    pub name: Bilingual,
    pub slug: String,
    pub description: Option<Bilingual>,
}

pub struct TaxonomyCommandService {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
    clock: Arc<dyn Clock>,
}

impl TaxonomyCommandService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            categories,
            tags,
            clock,
        }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_allowed(actor, Action::Create)?;

        let name = command.name.normalized();
        name.ensure_complete("name")?;
        let slug = Slug::new(command.slug)?;

        if self.categories.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "slug '{slug}' already exists"
            )));
        }

        let now = self.clock.now();
        let created = self
            .categories
            .insert(NewCategory {
                name,
                slug,
                description: command.description.map(Bilingual::normalized),
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn create_tag(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTagCommand,
    ) -> ApplicationResult<TagDto> {
        ensure_allowed(actor, Action::Create)?;

        let name = command.name.normalized();
        name.ensure_complete("name")?;
        let slug = Slug::new(command.slug)?;

        if self.tags.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "slug '{slug}' already exists"
            )));
        }

        let now = self.clock.now();
        let created = self
            .tags
            .insert(NewTag {
                name,
                slug,
                description: command.description.map(Bilingual::normalized),
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(created.into())
    }
}
