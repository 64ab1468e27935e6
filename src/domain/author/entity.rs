use super::value_objects::AuthorId;

/// An article author. `name` stays `None` until the author row has been
/// looked up; a placeholder only knows the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: Option<String>,
}

impl Author {
    #[must_use]
    pub const fn placeholder(id: AuthorId) -> Self {
        Self { id, name: None }
    }

    #[must_use]
    pub fn resolved(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}
