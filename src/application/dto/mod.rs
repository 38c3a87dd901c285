pub mod articles;
pub mod auth;
pub mod pagination;
pub mod taxonomy;

pub use articles::{ArticleDto, AuthorRefDto, CategoryRefDto, TagRefDto};
pub use auth::AuthenticatedUser;
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PageRequest};
pub use taxonomy::{CategoryDto, TagDto};
