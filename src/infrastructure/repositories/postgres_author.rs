use super::map_sqlx;
use super::rows::AuthorRow;
use crate::domain::author::{Author, AuthorId, AuthorRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

const SELECT_AUTHOR_BY_ID: &str = "SELECT id, name FROM authors WHERE id = $1";
// A single array parameter keeps the statement text fixed regardless of how
// many ids are looked up.
const SELECT_AUTHORS_BY_IDS: &str = "SELECT id, name FROM authors WHERE id = ANY($1)";

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn batch_keys(ids: &[AuthorId]) -> Vec<String> {
    ids.iter().map(|id| id.as_str().to_owned()).collect()
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(SELECT_AUTHOR_BY_ID)
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

        let rows = sqlx::query_as::<_, AuthorRow>(SELECT_AUTHORS_BY_IDS)
            .bind(batch_keys(ids))
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
