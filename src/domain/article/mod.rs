pub mod cursor;
pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;


pub use cursor::ArticleListCursor;
pub use entity::Article;
pub use query::{ArticleListQuery, ArticlePage};
pub use repository::ArticleReadRepository;
pub use value_objects::{ArticleId, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, PageLimit};
