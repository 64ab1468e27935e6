use crate::domain::article::Article;
use crate::domain::author::Author;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: String,
    /// Empty when no author row matched the identifier.
    #[serde(default)]
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into_inner(),
            name: author.name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: AuthorDto,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            title: article.title,
            body: article.body,
            author: article.author.into(),
        }
    }
}
