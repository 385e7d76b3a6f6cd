//! Contacts Search - Main entry point
//!
//! Serves the index, unindex and search operations over MCP on stdio.

use anyhow::Result;
use contacts_search::{Config, ContactsSearchServer, ElasticClient, SearchBackend, SearchController};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // stderr only, stdout carries MCP traffic
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using search service at {}", config.search_url);

    let client = ElasticClient::new(&config);
    let metrics = client.metrics().clone();
    let backend = Arc::new(client) as Arc<dyn SearchBackend>;
    let server = ContactsSearchServer::new(SearchController::new(backend));

    info!("Starting MCP server with stdio transport");
    contacts_search::server::run_server(server).await?;

    let summary = metrics.summary();
    info!(
        http_requests = summary.http_requests_total,
        http_errors = summary.http_errors_total,
        http_avg_ms = summary.http_duration_avg_ms,
        indexed = summary.documents_indexed_total,
        removed = summary.documents_removed_total,
        searches = summary.searches_total,
        hits = summary.hits_returned_total,
        "Contacts search server shutdown complete"
    );
    Ok(())
}
