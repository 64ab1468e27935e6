use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::{Author, AuthorId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub author: Author,
}

impl Article {
    /// Build an article as it comes out of the listing query: the author is
    /// known only by identifier until enrichment runs.
    #[must_use]
    pub fn with_author_placeholder(
        id: ArticleId,
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: AuthorId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author: Author::placeholder(author_id),
        }
    }

    #[must_use]
    pub const fn author_id(&self) -> &AuthorId {
        &self.author.id
    }
}
