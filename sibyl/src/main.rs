use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sibyl::api::{create_router, AppState};
use sibyl::config::Config;
use sibyl::embeddings::EmbeddingProvider;
use sibyl::vector::{ChromaStore, SimilaritySearch};

#[derive(Parser)]
#[command(name = "sibyl")]
#[command(about = "Grounded question answering over a ChromaDB knowledge base")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (default)
    Serve,
    /// Seed the vector store with the built-in sample corpus
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sibyl=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Loading embedding model: {}...", config.embeddings.model);
    let embeddings = EmbeddingProvider::new(&config.embeddings)?;

    tracing::info!(
        "Connecting to Chroma at {}:{}...",
        config.chroma.host,
        config.chroma.port
    );
    let store = ChromaStore::connect(&config.chroma, &config.retrieval, embeddings).await?;

    if let Some(Command::Seed) = args.command {
        sibyl::seed::run(&store).await?;
        return Ok(());
    }

    let store: Arc<dyn SimilaritySearch> = Arc::new(store);
    let state = AppState::new(config.clone(), store);

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Sibyl starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down...");
}
