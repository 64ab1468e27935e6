// tests/support/builders.rs
use article_listing::domain::article::{Article, ArticleId};
use article_listing::domain::author::AuthorId;

pub struct ArticleBuilder {
    id: String,
    title: String,
    body: String,
    author_id: String,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("Article {id}"),
            body: format!("Body of article {id}"),
            author_id: "1".into(),
            id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn build(self) -> Article {
        Article::with_author_placeholder(
            ArticleId::new(self.id),
            self.title,
            self.body,
            AuthorId::new(self.author_id),
        )
    }
}

/// `(article id, author id)` pairs to placeholder articles.
pub fn articles_by(pairs: &[(&str, &str)]) -> Vec<Article> {
    pairs
        .iter()
        .map(|(id, author)| ArticleBuilder::new(*id).author(*author).build())
        .collect()
}
