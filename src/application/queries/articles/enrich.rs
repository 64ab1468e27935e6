//! Resolution of placeholder authors on a fetched article page.
//!
//! Both strategies share one policy: an author id without a matching row
//! leaves the article's identifier-only author in place, while a failed
//! lookup aborts the whole page.

use crate::domain::{
    article::Article,
    author::{AuthorId, AuthorRepository},
    errors::{DomainError, DomainResult},
};
use futures::future::try_join_all;
use std::{collections::HashSet, fmt, str::FromStr, sync::Arc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichmentStrategy {
    /// One set-membership query for every distinct author on the page.
    #[default]
    Batched,
    /// One point lookup per article, all in flight at once.
    FanOut,
}

impl EnrichmentStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Batched => "batched",
            Self::FanOut => "fan_out",
        }
    }
}

impl fmt::Display for EnrichmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrichmentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "batched" | "batch" => Ok(Self::Batched),
            "fan_out" | "fan-out" | "fanout" => Ok(Self::FanOut),
            other => Err(format!(
                "unknown author enrichment strategy '{other}', expected 'batched' or 'fan_out'"
            )),
        }
    }
}

pub struct AuthorEnricher {
    author_repo: Arc<dyn AuthorRepository>,
    strategy: EnrichmentStrategy,
}

impl AuthorEnricher {
    #[must_use]
    pub const fn new(author_repo: Arc<dyn AuthorRepository>, strategy: EnrichmentStrategy) -> Self {
        Self {
            author_repo,
            strategy,
        }
    }

    /// Replace placeholder authors in place. Article order is never changed.
    ///
    /// # Errors
    ///
    /// Batched lookups surface the repository error as is. A failed fan-out
    /// lookup is reported as [`DomainError::Enrichment`] naming the author.
    pub async fn enrich(&self, articles: &mut [Article]) -> DomainResult<()> {
        if articles.is_empty() {
            return Ok(());
        }

        match self.strategy {
            EnrichmentStrategy::Batched => self.enrich_batched(articles).await,
            EnrichmentStrategy::FanOut => self.enrich_fan_out(articles).await,
        }
    }

    async fn enrich_batched(&self, articles: &mut [Article]) -> DomainResult<()> {
        let ids = distinct_author_ids(articles);
        tracing::debug!(
            strategy = %self.strategy,
            articles = articles.len(),
            authors = ids.len(),
            "resolving authors"
        );

        let authors = self.author_repo.find_by_ids(&ids).await?;

        for article in articles.iter_mut() {
            if let Some(author) = authors.get(article.author_id()) {
                article.author = author.clone();
            }
        }
        Ok(())
    }

    async fn enrich_fan_out(&self, articles: &mut [Article]) -> DomainResult<()> {
        tracing::debug!(
            strategy = %self.strategy,
            articles = articles.len(),
            "resolving authors"
        );

        let repo = self.author_repo.as_ref();
        // One lookup per article; try_join_all yields results in article
        // order and drops the remaining lookups as soon as one fails.
        let lookups = articles.iter().map(|article| {
            let id = article.author_id().clone();
            async move {
                repo.find_by_id(&id).await.map_err(|err| {
                    DomainError::Enrichment(format!("lookup of author '{id}' failed: {err}"))
                })
            }
        });
        let resolved = try_join_all(lookups).await?;

        for (article, author) in articles.iter_mut().zip(resolved) {
            if let Some(author) = author {
                article.author = author;
            }
        }
        Ok(())
    }
}

fn distinct_author_ids(articles: &[Article]) -> Vec<AuthorId> {
    let mut seen = HashSet::with_capacity(articles.len());
    articles
        .iter()
        .map(Article::author_id)
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}
