use crate::domain::article::{Article, ArticleListCursor, PageLimit};
use crate::domain::author::AuthorId;
use crate::domain::errors::{DomainError, DomainResult};

/// Validated listing criteria handed to an [`ArticleReadRepository`].
///
/// [`ArticleReadRepository`]: crate::domain::article::ArticleReadRepository
#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    pub limit: PageLimit,
    pub author_id: Option<AuthorId>,
    pub cursor: Option<ArticleListCursor>,
}

impl ArticleListQuery {
    #[must_use]
    pub const fn new(limit: PageLimit) -> Self {
        Self {
            limit,
            author_id: None,
            cursor: None,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: ArticleListCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Row count to request from the store: one more than the page size so
    /// the presence of a following page can be detected.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::QueryBuild`] if the row count overflows.
    pub fn fetch_limit(&self) -> DomainResult<i64> {
        i64::from(self.limit.get())
            .checked_add(1)
            .ok_or_else(|| DomainError::QueryBuild("page limit out of range".into()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub next_cursor: Option<ArticleListCursor>,
}

impl ArticlePage {
    /// Trim a result fetched with [`ArticleListQuery::fetch_limit`] down to
    /// the page size, deriving the next cursor from the last kept article.
    #[must_use]
    pub fn from_overfetch(mut articles: Vec<Article>, limit: PageLimit) -> Self {
        let limit = usize::try_from(limit.get()).unwrap_or(usize::MAX);
        let mut next_cursor = None;
        if articles.len() > limit {
            articles.truncate(limit);
            next_cursor = articles
                .last()
                .map(|last| ArticleListCursor::new(last.id.clone()));
        }
        Self {
            articles,
            next_cursor,
        }
    }
}
