pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, StatusUpdate};
pub use repository::{
    ArticleFilter, ArticleOrdering, ArticleReadRepository, ArticleViewCounter,
    ArticleWriteRepository,
};
pub use value_objects::{ArticleId, ArticleStatus};
