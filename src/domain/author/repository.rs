use crate::domain::author::{Author, AuthorId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Point lookup. `Ok(None)` means no row exists for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Persistence`](crate::domain::errors::DomainError::Persistence)
    /// when the query cannot be executed or the row cannot be decoded.
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>>;

    /// Set-membership lookup. Identifiers without a row are simply absent
    /// from the returned map.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthorRepository::find_by_id`].
    async fn find_by_ids(&self, ids: &[AuthorId]) -> DomainResult<HashMap<AuthorId, Author>>;
}
