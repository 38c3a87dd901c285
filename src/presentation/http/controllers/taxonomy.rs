// src/presentation/http/controllers/taxonomy.rs
use crate::application::{
    commands::taxonomy::{CreateCategoryCommand, CreateTagCommand},
    dto::{CategoryDto, TagDto},
};
use crate::domain::bilingual::Bilingual;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: Bilingual,
    pub slug: String,
    #[serde(default)]
    pub description: Option<Bilingual>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    pub name: Bilingual,
    pub slug: String,
    #[serde(default)]
    pub description: Option<Bilingual>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "All categories.", body = [CategoryDto])),
    tag = "Taxonomy"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .taxonomy_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Created category.", body = CategoryDto),
        (status = 400, description = "Incomplete bilingual name or invalid slug."),
        (status = 403, description = "Role may not create categories."),
        (status = 409, description = "Slug already exists.")
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .taxonomy_commands
        .create_category(
            &user,
            CreateCategoryCommand {
                name: payload.name,
                slug: payload.slug,
                description: payload.description,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses((status = 200, description = "All tags.", body = [TagDto])),
    tag = "Taxonomy"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .taxonomy_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 200, description = "Created tag.", body = TagDto),
        (status = 400, description = "Incomplete bilingual name or invalid slug."),
        (status = 403, description = "Role may not create tags."),
        (status = 409, description = "Slug already exists.")
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .taxonomy_commands
        .create_tag(
            &user,
            CreateTagCommand {
                name: payload.name,
                slug: payload.slug,
                description: payload.description,
            },
        )
        .await
        .into_http()
        .map(Json)
}
