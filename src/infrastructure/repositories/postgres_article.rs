// src/infrastructure/repositories/postgres_article.rs
use super::error::map_sqlx;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleOrdering, ArticleReadRepository, ArticleStatus,
    ArticleUpdate, ArticleViewCounter, ArticleWriteRepository, NewArticle,
};
use crate::domain::bilingual::Bilingual;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{CategoryId, TagId};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const ARTICLE_COLUMNS: &str = "id, title_en, title_bn, slug, excerpt_en, excerpt_bn, \
     content_en, content_bn, cover_image, gallery, category_id, author_id, status, \
     published_at, views, is_featured, priority, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title_en: String,
    title_bn: String,
    slug: String,
    excerpt_en: String,
    excerpt_bn: String,
    content_en: String,
    content_bn: String,
    cover_image: Option<String>,
    gallery: Vec<String>,
    category_id: i64,
    author_id: i64,
    status: String,
    published_at: Option<DateTime<Utc>>,
    views: i64,
    is_featured: bool,
    priority: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn hydrate(row: ArticleRow, tag_ids: Vec<TagId>) -> DomainResult<Article> {
    Ok(Article {
        id: ArticleId::new(row.id)?,
        title: Bilingual::new(row.title_en, row.title_bn),
        slug: Slug::new(row.slug)?,
        excerpt: Bilingual::new(row.excerpt_en, row.excerpt_bn),
        content: Bilingual::new(row.content_en, row.content_bn),
        cover_image: row.cover_image,
        gallery: row.gallery,
        category_id: CategoryId::new(row.category_id)?,
        tag_ids,
        author_id: UserId::new(row.author_id)?,
        status: row.status.parse::<ArticleStatus>()?,
        published_at: row.published_at,
        views: row.views,
        is_featured: row.is_featured,
        priority: row.priority,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

async fn fetch_tag_ids<'e, E>(executor: E, article_id: i64) -> DomainResult<Vec<TagId>>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let rows: Vec<(i64,)> =
        sqlx::query_as("SELECT tag_id FROM article_tags WHERE article_id = $1 ORDER BY tag_id")
            .bind(article_id)
            .fetch_all(executor)
            .await
            .map_err(map_sqlx)?;
    rows.into_iter().map(|(id,)| TagId::new(id)).collect()
}

async fn fetch_tag_map(pool: &PgPool, article_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<TagId>>> {
    if article_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT article_id, tag_id FROM article_tags WHERE article_id = ANY($1) \
         ORDER BY article_id, tag_id",
    )
    .bind(article_ids)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let mut map: HashMap<i64, Vec<TagId>> = HashMap::new();
    for (article_id, tag_id) in rows {
        map.entry(article_id).or_default().push(TagId::new(tag_id)?);
    }
    Ok(map)
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            excerpt,
            content,
            cover_image,
            gallery,
            category_id,
            tag_ids,
            author_id,
            status,
            published_at,
            is_featured,
            priority,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title_en, title_bn, slug, excerpt_en, excerpt_bn, \
             content_en, content_bn, cover_image, gallery, category_id, author_id, status, \
             published_at, is_featured, priority, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(&title.en)
        .bind(&title.bn)
        .bind(slug.as_str())
        .bind(&excerpt.en)
        .bind(&excerpt.bn)
        .bind(&content.en)
        .bind(&content.bn)
        .bind(&cover_image)
        .bind(&gallery)
        .bind(i64::from(category_id))
        .bind(i64::from(author_id))
        .bind(status.as_str())
        .bind(published_at)
        .bind(is_featured)
        .bind(priority)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let tag_id_values: Vec<i64> = tag_ids.iter().copied().map(i64::from).collect();
        if !tag_id_values.is_empty() {
            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id) SELECT $1, unnest($2::bigint[])",
            )
            .bind(row.id)
            .bind(&tag_id_values)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        hydrate(row, tag_ids)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            excerpt,
            content,
            slug,
            cover_image,
            gallery,
            category_id,
            tag_ids,
            is_featured,
            priority,
            status_change,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title_en = ");
            builder.push_bind(title.en);
            builder.push(", title_bn = ");
            builder.push_bind(title.bn);
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt_en = ");
            builder.push_bind(excerpt.en);
            builder.push(", excerpt_bn = ");
            builder.push_bind(excerpt.bn);
        }

        if let Some(content) = content {
            builder.push(", content_en = ");
            builder.push_bind(content.en);
            builder.push(", content_bn = ");
            builder.push_bind(content.bn);
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        if let Some(cover_image) = cover_image {
            builder.push(", cover_image = ");
            builder.push_bind(cover_image);
        }

        if let Some(gallery) = gallery {
            builder.push(", gallery = ");
            builder.push_bind(gallery);
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(is_featured) = is_featured {
            builder.push(", is_featured = ");
            builder.push_bind(is_featured);
        }

        if let Some(priority) = priority {
            builder.push(", priority = ");
            builder.push_bind(priority);
        }

        if let Some(state) = status_change {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        let final_tags = if let Some(tag_ids) = tag_ids {
            sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
                .bind(row.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            let tag_id_values: Vec<i64> = tag_ids.iter().copied().map(i64::from).collect();
            if !tag_id_values.is_empty() {
                sqlx::query(
                    "INSERT INTO article_tags (article_id, tag_id) \
                     SELECT $1, unnest($2::bigint[])",
                )
                .bind(row.id)
                .bind(&tag_id_values)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            }
            tag_ids
        } else {
            fetch_tag_ids(&mut *tx, row.id).await?
        };

        tx.commit().await.map_err(map_sqlx)?;
        hydrate(row, final_tags)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleViewCounter for PostgresArticleWriteRepository {
    async fn record_view(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET views = views + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleFilter) {
        let mut has_where = false;
        let mut separator = |builder: &mut QueryBuilder<'a, Postgres>| {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                has_where = true;
            }
        };

        if let Some(now) = filter.visible_at {
            separator(builder);
            builder.push("(status = 'published' AND published_at <= ");
            builder.push_bind(now);
            builder.push(")");
        }

        if let Some(status) = filter.status {
            separator(builder);
            builder.push("status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(category) = filter.category {
            separator(builder);
            builder.push("category_id = ");
            builder.push_bind(i64::from(category));
        }

        if let Some(featured) = filter.featured {
            separator(builder);
            builder.push("is_featured = ");
            builder.push_bind(featured);
        }

        if let Some(search) = filter.search.as_deref() {
            let pattern = format!("%{search}%");
            separator(builder);
            builder.push("(title_en ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR title_bn ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR excerpt_en ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR excerpt_bn ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, ordering: ArticleOrdering) {
        match ordering {
            ArticleOrdering::Newest => {
                builder.push(" ORDER BY created_at DESC, id DESC");
            }
            ArticleOrdering::MostViewed => {
                builder.push(" ORDER BY views DESC, id DESC");
            }
            ArticleOrdering::FeaturedRank => {
                builder.push(" ORDER BY priority DESC, created_at DESC, id DESC");
            }
        }
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_conditions(&mut builder, filter);

        let (total,): (i64,) = builder
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn hydrate_rows(&self, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tag_map = fetch_tag_map(&self.pool, &ids).await?;
        rows.into_iter()
            .map(|row| {
                let tags = tag_map.remove(&row.id).unwrap_or_default();
                hydrate(row, tags)
            })
            .collect()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let tags = fetch_tag_ids(&self.pool, row.id).await?;
                hydrate(row, tags).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let tags = fetch_tag_ids(&self.pool, row.id).await?;
                hydrate(row, tags).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        ordering: ArticleOrdering,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let total = self.count(filter).await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(&mut builder, filter);
        Self::apply_ordering(&mut builder, ordering);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = self.hydrate_rows(rows).await?;
        Ok((articles, total))
    }
}
