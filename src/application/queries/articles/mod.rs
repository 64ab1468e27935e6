mod enrich;
mod list;
mod service;

pub use enrich::{AuthorEnricher, EnrichmentStrategy};
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
