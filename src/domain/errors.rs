// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("query build error: {0}")]
    QueryBuild(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("author enrichment failed: {0}")]
    Enrichment(String),
}
