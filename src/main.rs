use anyhow::{Result, anyhow};
use article_listing::application::services::ApplicationServices;
use article_listing::config::AppConfig;
use article_listing::domain::{article::ArticleReadRepository, author::AuthorRepository};
use article_listing::infrastructure::{
    database::{self, DatabaseBackend},
    repositories::{
        PostgresArticleReadRepository, PostgresAuthorRepository, SqliteArticleReadRepository,
        SqliteAuthorRepository,
    },
};
use article_listing::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(&config);

    let (article_repo, author_repo) = build_repositories(&config)?;
    let services = Arc::new(ApplicationServices::new(
        article_repo,
        author_repo,
        config.enrichment(),
    ));
    tracing::info!(enrichment = %config.enrichment(), "article services ready");

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.request_timeout());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn ArticleReadRepository>, Arc<dyn AuthorRepository>)> {
    let url = config.database_url();
    let backend = DatabaseBackend::from_url(url)
        .ok_or_else(|| anyhow!("unsupported DATABASE_URL scheme, expected postgres:// or sqlite:"))?;

    let repos: (Arc<dyn ArticleReadRepository>, Arc<dyn AuthorRepository>) = match backend {
        DatabaseBackend::Postgres => {
            let pool = database::init_pg_pool(url, config.pool())?;
            (
                Arc::new(PostgresArticleReadRepository::new(pool.clone())),
                Arc::new(PostgresAuthorRepository::new(pool)),
            )
        }
        DatabaseBackend::Sqlite => {
            let pool = database::init_sqlite_pool(url, config.pool())?;
            (
                Arc::new(SqliteArticleReadRepository::new(pool.clone())),
                Arc::new(SqliteAuthorRepository::new(pool)),
            )
        }
    };

    tracing::info!(
        backend = ?backend,
        max_connections = config.pool().max_connections,
        "database pool configured"
    );
    Ok(repos)
}

fn init_tracing(config: &AppConfig) {
    let default_filter = if config.debug() {
        "debug,tower_http=debug,sqlx=info"
    } else {
        "info,tower_http=info,sqlx=warn"
    };
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(env_filter));
    let initialised = if config.debug() {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    };

    if initialised.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    } else if config.debug() {
        tracing::warn!("running in debug mode");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
