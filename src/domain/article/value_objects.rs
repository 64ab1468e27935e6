use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(String);

impl ArticleId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page size for a listing request. Always at least 1; values above
/// [`MAX_PAGE_LIMIT`] are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit(u32);

impl PageLimit {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when `value` is zero or negative.
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::Validation(format!(
                "parameter 'limit' must be a positive integer, got {value}"
            )));
        }
        let capped = value.min(i64::from(MAX_PAGE_LIMIT));
        Ok(Self(u32::try_from(capped).unwrap_or(MAX_PAGE_LIMIT)))
    }

    /// Parse the raw `limit` query value. A missing or blank value yields
    /// the default page size.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the value is not an integer
    /// or is not positive.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };

        let parsed = value.parse::<i64>().map_err(|err| {
            DomainError::Validation(format!(
                "parameter 'limit' is not valid, should be a number. Error message: {err}"
            ))
        })?;
        Self::new(parsed)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self(DEFAULT_PAGE_LIMIT)
    }
}
