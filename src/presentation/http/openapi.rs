// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, AuthorDto};
use crate::presentation::http::error::ErrorResponse;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        super::routes::health
    ),
    components(schemas(StatusResponse, ErrorResponse, ArticleDto, AuthorDto)),
    tags(
        (name = "Articles", description = "Article listing"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Article Listing API",
        description = "Read-only article listing with author enrichment",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

#[must_use]
pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
