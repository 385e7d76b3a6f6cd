//! MCP server exposing contact indexing and search.
//!
//! The server speaks the Model Context Protocol over stdio; it is the
//! transport in front of [`SearchController`](crate::services::SearchController).

pub mod handlers;

pub use handlers::ContactsSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: ContactsSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
