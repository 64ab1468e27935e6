// tests/support/mocks/mod.rs
//! テスト用リポジトリモック
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod author_repos;

pub use article_repos::{FailingArticleRead, InMemoryArticleRead, PendingArticleRead};
pub use author_repos::{FailingAuthorRepo, InMemoryAuthorRepo, LookupCounters, PendingAuthorRepo};
