use super::map_sqlx;
use super::rows::AuthorRow;
use crate::domain::author::{Author, AuthorId, AuthorRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: SqlitePool,
}

impl SqliteAuthorRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// SQLite has no array binds, so the `IN` list gets one placeholder per id.
    fn build_batch_query(ids: &[AuthorId]) -> QueryBuilder<'_, Sqlite> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name FROM authors WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.as_str());
        }
        separated.push_unseparated(")");
        builder
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>("SELECT id, name FROM authors WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Author::from))
    }

    async fn find_by_ids(&self, ids: &[AuthorId]) -> DomainResult<HashMap<AuthorId, Author>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut builder = Self::build_batch_query(ids);
        let rows = builder
            .build_query_as::<AuthorRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(Author::from)
            .map(|author| (author.id.clone(), author))
            .collect())
    }
}
