// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use article_listing::application::queries::articles::{ArticleQueryService, EnrichmentStrategy};
use article_listing::application::services::ApplicationServices;
use article_listing::domain::article::ArticleReadRepository;
use article_listing::domain::author::AuthorRepository;
use article_listing::infrastructure::repositories::{
    SqliteArticleReadRepository, SqliteAuthorRepository,
};
use article_listing::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt as _;

const SCHEMA: [&str; 2] = [
    "CREATE TABLE authors (id TEXT PRIMARY KEY, name TEXT)",
    "CREATE TABLE articles (id TEXT PRIMARY KEY, title TEXT, content TEXT, author_id TEXT)",
];

/// Single-connection in-memory SQLite database with the listing schema.
/// One connection keeps every query on the same in-memory database.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("create schema");
    }
    pool
}

pub async fn seed_author(pool: &SqlitePool, id: &str, name: Option<&str>) {
    sqlx::query("INSERT INTO authors (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("insert author");
}

pub async fn seed_article(pool: &SqlitePool, id: &str, title: Option<&str>, author_id: &str) {
    sqlx::query("INSERT INTO articles (id, title, content, author_id) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(title)
        .bind(format!("content of {id}"))
        .bind(author_id)
        .execute(pool)
        .await
        .expect("insert article");
}

/// Seed `(article id, author id)` pairs with default titles.
pub async fn seed_articles(pool: &SqlitePool, pairs: &[(&str, &str)]) {
    for (id, author) in pairs {
        seed_article(pool, id, Some(&format!("Title {id}")), author).await;
    }
}

pub fn sqlite_query_service(pool: &SqlitePool, strategy: EnrichmentStrategy) -> ArticleQueryService {
    ArticleQueryService::new(
        Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        Arc::new(SqliteAuthorRepository::new(pool.clone())),
        strategy,
    )
}

pub fn make_router(
    article_repo: Arc<dyn ArticleReadRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    strategy: EnrichmentStrategy,
) -> axum::Router {
    make_router_with_timeout(article_repo, author_repo, strategy, Duration::from_secs(5))
}

pub fn make_router_with_timeout(
    article_repo: Arc<dyn ArticleReadRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    strategy: EnrichmentStrategy,
    request_timeout: Duration,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(article_repo, author_repo, strategy));
    build_router(HttpState { services }, request_timeout)
}

pub fn make_sqlite_router(pool: &SqlitePool, strategy: EnrichmentStrategy) -> axum::Router {
    make_router(
        Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        Arc::new(SqliteAuthorRepository::new(pool.clone())),
        strategy,
    )
}

/// Issue a GET and return status, headers and the parsed JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (parts.status, parts.headers, json)
}

/// Assert an `ErrorResponse` JSON with the expected status and error string.
pub async fn assert_error_response(
    app: axum::Router,
    uri: &str,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    let (status, _headers, json) = get_json(app, uri).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}

/// Ids of the articles in a JSON listing body, in response order.
pub fn article_ids(json: &Value) -> Vec<String> {
    json.as_array()
        .expect("listing body is an array")
        .iter()
        .map(|a| a["id"].as_str().unwrap_or_default().to_string())
        .collect()
}
