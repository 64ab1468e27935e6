use crate::domain::article::{Article, ArticleId};
use crate::domain::author::{Author, AuthorId};
use sqlx::FromRow;

pub(super) const SELECT_ARTICLES: &str = "SELECT id, title, content, author_id FROM articles";

#[derive(Debug, FromRow)]
pub(super) struct ArticleRow {
    id: String,
    title: String,
    content: String,
    author_id: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self::with_author_placeholder(
            ArticleId::new(row.id),
            row.title,
            row.content,
            AuthorId::new(row.author_id),
        )
    }
}

#[derive(Debug, FromRow)]
pub(super) struct AuthorRow {
    id: String,
    name: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self::resolved(AuthorId::new(row.id), row.name)
    }
}
