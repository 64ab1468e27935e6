use std::sync::Arc;

use super::enrich::{AuthorEnricher, EnrichmentStrategy};
use crate::domain::{article::ArticleReadRepository, author::AuthorRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) enricher: AuthorEnricher,
}

impl ArticleQueryService {
    #[must_use]
    pub const fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        strategy: EnrichmentStrategy,
    ) -> Self {
        Self {
            read_repo,
            enricher: AuthorEnricher::new(author_repo, strategy),
        }
    }
}
