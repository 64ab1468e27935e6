// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::articles::{ArticleQueryService, EnrichmentStrategy},
    domain::{article::ArticleReadRepository, author::AuthorRepository},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        enrichment: EnrichmentStrategy,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            author_repo,
            enrichment,
        ));

        Self { article_queries }
    }
}
