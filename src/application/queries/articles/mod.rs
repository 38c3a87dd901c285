// src/application/queries/articles/mod.rs
mod get;
mod list;
mod service;

pub use get::{GetArticleByIdQuery, GetArticleBySlugQuery};
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
