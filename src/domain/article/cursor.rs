use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

const CURSOR_PREFIX: &str = "id|";

/// Keyset continuation token. Encodes the id of the last article returned,
/// so no state is kept between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListCursor {
    pub last_id: ArticleId,
}

impl ArticleListCursor {
    #[must_use]
    pub const fn new(last_id: ArticleId) -> Self {
        Self { last_id }
    }

    #[must_use]
    pub fn encode(&self) -> String {
        let raw = format!("{CURSOR_PREFIX}{}", self.last_id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for tokens that were not produced
    /// by [`ArticleListCursor::encode`].
    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let id = raw
            .strip_prefix(CURSOR_PREFIX)
            .filter(|id| !id.is_empty())
            .ok_or_else(invalid)?;
        Ok(Self::new(ArticleId::new(id)))
    }
}
