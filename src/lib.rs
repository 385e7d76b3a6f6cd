//! Contacts Search - contact records mirrored into a document-search index.
//!
//! The primary store owns contacts; this crate validates them, keeps the
//! search index copy consistent, and searches that copy.
//!
//! # Architecture
//!
//! - **models**: Contact, Address, Position, notes, tags and the request/reply envelopes
//! - **domain**: Validated value objects (contact identifier, email address)
//! - **error**: Error types for the client, the core operations and configuration
//! - **config**: Configuration management from environment variables
//! - **client**: The search backend seam and its HTTP implementation
//! - **services**: Index synchronizer, search gateway and the controller over both
//! - **metrics**: Request and document counters
//! - **server**: MCP protocol server

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;

pub use client::{ElasticClient, SearchBackend};
pub use config::Config;
pub use error::{ConfigError, ContactsError, SearchApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Address, Contact, FieldErrors, Note, Position, Tag};
pub use server::ContactsSearchServer;
pub use services::{IndexSynchronizer, SearchController, SearchGateway};
