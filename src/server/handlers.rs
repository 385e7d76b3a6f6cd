//! MCP tool handlers for the contacts search server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! Core operations block on HTTP, so every tool runs them on the blocking pool.

use crate::models::{Contact, ContactArgs, SearchArgs};
use crate::services::SearchController;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;

/// The MCP server exposing contact indexing and search.
#[derive(Clone)]
pub struct ContactsSearchServer {
    controller: SearchController,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactsSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contacts-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Keeps contact records mirrored in the search index and searches them by field.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactToolParams {
    /// Contact document, as stored by the primary store
    contact: serde_json::Value,
    #[serde(default)]
    mission_id: Option<u64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    query: String,
    /// Field searched together with `firstname` (default: `surname`)
    #[serde(default)]
    field: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    id: u64,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn parse_args(params: ContactToolParams) -> Result<ContactArgs, McpError> {
    let contact: Contact = serde_json::from_value(params.contact).map_err(to_invalid_params)?;
    Ok(ContactArgs {
        mission_id: params.mission_id,
        contact,
    })
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

/// Run a blocking controller call off the async runtime.
async fn run_blocking<T, F>(f: F) -> Result<T, McpError>
where
    F: FnOnce() -> Result<T, crate::error::ContactsError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| to_mcp_error(format!("Task join error: {}", e)))?
        .map_err(to_mcp_error)
}

#[tool_router]
impl ContactsSearchServer {
    pub fn new(controller: SearchController) -> Self {
        Self {
            controller,
            tool_router: Self::tool_router(),
        }
    }

    /// Upsert a contact into the search index.
    #[tool(description = "Index a contact document under its identifier. The contact must carry a non-zero id.")]
    async fn index_contact(
        &self,
        params: Parameters<ContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let args = parse_args(params.0)?;
        let controller = self.controller.clone();

        let reply = run_blocking(move || controller.index(&args)).await?;
        json_result(&reply)
    }

    /// Remove a contact from the search index.
    #[tool(description = "Remove a contact document from the search index. Fails if no document exists for the id.")]
    async fn unindex_contact(
        &self,
        params: Parameters<ContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let args = parse_args(params.0)?;
        let controller = self.controller.clone();

        let reply = run_blocking(move || controller.unindex(&args)).await?;
        json_result(&reply)
    }

    /// Search contacts by free text.
    #[tool(description = "Search contacts. All query terms must match across the given field and firstname; results are sorted by surname.")]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let field = params.field.unwrap_or_else(|| "surname".to_string());
        let args = SearchArgs::new(params.query, field);
        let search = args.search.clone();
        let controller = self.controller.clone();

        let reply = run_blocking(move || controller.search_contacts(&args)).await?;
        json_result(&serde_json::json!({
            "query": search.query,
            "field": search.field,
            "result_count": reply.contacts.len(),
            "contacts": reply.contacts,
        }))
    }

    /// Fetch the indexed copy of a contact.
    #[tool(description = "Read the document currently indexed for a contact id.")]
    async fn lookup_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        let controller = self.controller.clone();

        let found = run_blocking(move || controller.synchronizer().lookup(id)).await?;
        json_result(&serde_json::json!({ "id": id, "contact": found }))
    }

    /// Check a contact before it is written.
    #[tool(description = "Validate a contact: firstname and surname are required, mail must be a valid address when present.")]
    async fn validate_contact(
        &self,
        params: Parameters<ContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let args = parse_args(params.0)?;
        let errors = args.contact.validate();
        json_result(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
        }))
    }
}
