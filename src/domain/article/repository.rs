use crate::domain::article::{ArticleListQuery, ArticlePage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Fetch one page of articles in listing order. Authors are returned as
    /// identifier-only placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Persistence`](crate::domain::errors::DomainError::Persistence)
    /// when the query fails or any row cannot be decoded; no partial page is
    /// returned.
    async fn list_page(&self, query: &ArticleListQuery) -> DomainResult<ArticlePage>;
}
