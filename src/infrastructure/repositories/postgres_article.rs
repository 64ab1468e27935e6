// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use super::rows::{ArticleRow, SELECT_ARTICLES};
use crate::domain::article::{Article, ArticleListQuery, ArticlePage, ArticleReadRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_list_query(
        query: &ArticleListQuery,
    ) -> DomainResult<QueryBuilder<'_, Postgres>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_ARTICLES);
        let mut has_where = false;

        if let Some(author_id) = &query.author_id {
            builder.push(" WHERE author_id = ");
            builder.push_bind(author_id.as_str());
            has_where = true;
        }

        if let Some(cursor) = &query.cursor {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("id > ");
            builder.push_bind(cursor.last_id.as_str());
        }

        builder.push(" ORDER BY id ASC LIMIT ");
        builder.push_bind(query.fetch_limit()?);
        Ok(builder)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list_page(&self, query: &ArticleListQuery) -> DomainResult<ArticlePage> {
        let mut builder = Self::build_list_query(query)?;
        let mut rows = builder.build_query_as::<ArticleRow>().fetch(&self.pool);

        let mut articles = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(map_sqlx)? {
            articles.push(Article::from(row));
        }

        Ok(ArticlePage::from_overfetch(articles, query.limit))
    }
}
