// src/infrastructure/repositories/postgres_taxonomy.rs
use super::error::map_sqlx;
use crate::domain::bilingual::Bilingual;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{
    Category, CategoryId, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const CATEGORY_COLUMNS: &str =
    "id, name_en, name_bn, slug, description_en, description_bn, created_at, updated_at";
const TAG_COLUMNS: &str =
    "id, name_en, name_bn, slug, description_en, description_bn, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TaxonomyRow {
    id: i64,
    name_en: String,
    name_bn: String,
    slug: String,
    description_en: Option<String>,
    description_bn: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn description_from_columns(en: Option<String>, bn: Option<String>) -> Option<Bilingual> {
    match (en, bn) {
        (None, None) => None,
        (en, bn) => Some(Bilingual::new(
            en.unwrap_or_default(),
            bn.unwrap_or_default(),
        )),
    }
}

impl TryFrom<TaxonomyRow> for Category {
    type Error = DomainError;

    fn try_from(row: TaxonomyRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id)?,
            name: Bilingual::new(row.name_en, row.name_bn),
            slug: Slug::new(row.slug)?,
            description: description_from_columns(row.description_en, row.description_bn),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<TaxonomyRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TaxonomyRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TagId::new(row.id)?,
            name: Bilingual::new(row.name_en, row.name_bn),
            slug: Slug::new(row.slug)?,
            description: description_from_columns(row.description_en, row.description_bn),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "INSERT INTO categories (name_en, name_bn, slug, description_en, description_bn, \
             created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(&category.name.en)
        .bind(&category.name.bn)
        .bind(category.slug.as_str())
        .bind(category.description.as_ref().map(|d| d.en.clone()))
        .bind(category.description.as_ref().map(|d| d.bn.clone()))
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let id_values: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ANY($1)"
        ))
        .bind(&id_values)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY slug"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "INSERT INTO tags (name_en, name_bn, slug, description_en, description_bn, \
             created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {TAG_COLUMNS}"
        ))
        .bind(&tag.name.en)
        .bind(&tag.name.bn)
        .bind(tag.slug.as_str())
        .bind(tag.description.as_ref().map(|d| d.en.clone()))
        .bind(tag.description.as_ref().map(|d| d.bn.clone()))
        .bind(tag.created_at)
        .bind(tag.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let id_values: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags WHERE id = ANY($1)"
        ))
        .bind(&id_values)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TaxonomyRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags ORDER BY slug"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
