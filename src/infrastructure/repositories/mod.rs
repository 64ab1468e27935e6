// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_author;
mod rows;
mod sqlite_article;
mod sqlite_author;

use error::map_sqlx;
pub use postgres_article::PostgresArticleReadRepository;
pub use postgres_author::PostgresAuthorRepository;
pub use sqlite_article::SqliteArticleReadRepository;
pub use sqlite_author::SqliteAuthorRepository;
