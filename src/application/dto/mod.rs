mod articles;
mod pagination;

pub use articles::{ArticleDto, AuthorDto};
pub use pagination::CursorPage;
