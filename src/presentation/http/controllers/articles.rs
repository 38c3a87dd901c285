// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, SetArticleStatusCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, DEFAULT_PAGE_SIZE, Page},
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::domain::{article::ArticleStatus, bilingual::Bilingual};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Distinguishes an absent key (leave the field alone) from an explicit
/// `null` (clear it).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: Bilingual,
    pub slug: String,
    pub excerpt: Bilingual,
    pub content: Bilingual,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub category: i64,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<Bilingual>,
    pub excerpt: Option<Bilingual>,
    pub content: Option<Bilingual>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub cover_image: Option<Option<String>>,
    pub gallery: Option<Vec<String>>,
    pub category: Option<i64>,
    pub tags: Option<Vec<i64>>,
    pub is_featured: Option<bool>,
    pub priority: Option<i32>,
    pub status: Option<ArticleStatus>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    pub status: ArticleStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Paginated article listing.", body = crate::presentation::http::openapi::ArticleListResponse),
        (status = 400, description = "Invalid pagination or filter.")
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(
            actor.0.as_ref(),
            ListArticlesQuery {
                status: params.status,
                category: params.category,
                search: params.search,
                featured: params.featured,
                order: params.order,
                page: params.page,
                page_size: params.limit,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with expanded category, tags and author.", body = ArticleDto),
        (status = 404, description = "Absent, or not visible to the caller.")
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(actor.0.as_ref(), GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with expanded category, tags and author.", body = ArticleDto),
        (status = 404, description = "Absent, or not visible to the caller.")
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(actor.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article.", body = ArticleDto),
        (status = 400, description = "Missing bilingual fields or invalid payload."),
        (status = 403, description = "Role may not create articles."),
        (status = 409, description = "Slug already exists.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        cover_image: payload.cover_image,
        gallery: payload.gallery,
        category_id: payload.category,
        tag_ids: payload.tags,
        status: payload.status,
        published_at: payload.published_at,
        is_featured: payload.is_featured,
        priority: payload.priority,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Invalid payload or incomplete translations on publish."),
        (status = 403, description = "Role may not update articles."),
        (status = 404, description = "Article not found."),
        (status = 409, description = "Slug already exists.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        excerpt: payload.excerpt,
        content: payload.content,
        slug: payload.slug,
        cover_image: payload.cover_image,
        gallery: payload.gallery,
        category_id: payload.category,
        tag_ids: payload.tags,
        is_featured: payload.is_featured,
        priority: payload.priority,
        status: payload.status,
        published_at: payload.published_at,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/status",
    params(("id" = i64, Path, description = "Article id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Article after the transition.", body = ArticleDto),
        (status = 400, description = "Transition rejected."),
        (status = 403, description = "Role may not publish articles."),
        (status = 404, description = "Article not found.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn set_article_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<StatusRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = SetArticleStatusCommand {
        id,
        status: payload.status,
        published_at: payload.published_at,
    };

    state
        .services
        .article_commands
        .set_article_status(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted."),
        (status = 403, description = "Only administrators may delete."),
        (status = 404, description = "Article not found.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
