mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod repository;
mod routes;
mod service;
mod state;
mod validation;

use std::sync::Arc;

use anyhow::Context;
use config::{Config, StoreBackend};
use repository::{InMemoryTodoRepository, SpannerTodoRepository, TodoRepository};
use service::TodoService;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_service=info,tower_http=info")),
        )
        .init();

    tracing::info!("todo-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let repo: Arc<dyn TodoRepository> = match (config.store_backend, &config.spanner) {
        (StoreBackend::Spanner, Some(spanner)) => {
            Arc::new(SpannerTodoRepository::from_config(spanner).await?)
        }
        (StoreBackend::Spanner, None) => anyhow::bail!("Spanner backend selected without Spanner settings"),
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory store; todos are lost on restart");
            Arc::new(InMemoryTodoRepository::new())
        }
    };

    let state = AppState {
        todo_service: TodoService::new(repo),
    };
    let app = routes::app(state, config.serve_api_docs);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
