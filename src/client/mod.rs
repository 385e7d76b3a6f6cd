//! Client for the document-search service.
//!
//! [`SearchBackend`] is the seam the synchronizer and gateway depend on; it is
//! passed in explicitly so tests can substitute an in-memory stub.
//! [`ElasticClient`] implements it over the Elasticsearch REST API with a
//! synchronous `ureq` agent. Calls block; async callers should go through
//! `tokio::task::spawn_blocking`.

pub mod query;

pub use query::{MatchType, MultiMatchQuery, Operator, SearchRequest};

use crate::config::Config;
use crate::error::{SearchApiError, SearchApiResult};
use crate::metrics::{HttpTimer, Metrics};
use serde::Deserialize;
use serde_json::Value;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Index holding the contact documents.
pub const CONTACTS_INDEX: &str = "contacts";

/// Mapping type of the contact documents.
pub const CONTACT_TYPE: &str = "contact";

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Document id in the index
    pub id: String,

    /// Raw JSON text of the stored document, if the service returned one
    pub source: Option<String>,
}

impl Hit {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: Some(source.into()),
        }
    }
}

/// The hits container of a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHits {
    /// Total matches reported by the service
    pub total: u64,

    /// Returned hits, in service order
    pub hits: Vec<Hit>,
}

/// A decoded search response. `hits` is `None` when the service sent no hits container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub hits: Option<SearchHits>,
}

/// Operations the core needs from a document-search service.
pub trait SearchBackend: Send + Sync {
    /// Insert or replace `document` under `id`.
    fn upsert(&self, index: &str, doc_type: &str, id: &str, document: &Value)
        -> SearchApiResult<()>;

    /// Delete the document stored under `id`.
    ///
    /// A missing document is reported as `SearchApiError::NotFound`.
    fn delete(&self, index: &str, doc_type: &str, id: &str) -> SearchApiResult<()>;

    /// Fetch the stored document under `id`, `None` if there is none.
    fn get(&self, index: &str, doc_type: &str, id: &str) -> SearchApiResult<Option<Value>>;

    /// Run a search request.
    fn search(&self, index: &str, request: &SearchRequest) -> SearchApiResult<SearchResponse>;
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    hits: Option<RawHits>,
}

#[derive(Debug, Deserialize)]
struct RawHits {
    #[serde(default)]
    total: Option<RawTotal>,
    #[serde(default)]
    hits: Vec<RawHit>,
}

/// `total` is a number on older servers and `{"value": n}` on newer ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTotal {
    Count(u64),
    Object { value: u64 },
}

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(rename = "_source", default)]
    source: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawGetResponse {
    #[serde(default)]
    found: bool,
    #[serde(rename = "_source", default)]
    source: Option<Value>,
}

impl RawSearchResponse {
    fn into_response(self) -> SearchResponse {
        let hits = self.hits.map(|raw_hits| {
            let hits: Vec<Hit> = raw_hits
                .hits
                .into_iter()
                .map(|hit| Hit {
                    id: hit.id,
                    source: hit.source.map(|doc| doc.to_string()),
                })
                .collect();

            let total = match raw_hits.total {
                Some(RawTotal::Count(n)) | Some(RawTotal::Object { value: n }) => n,
                None => hits.len() as u64,
            };

            SearchHits { total, hits }
        });

        SearchResponse { hits }
    }
}

/// HTTP client for an Elasticsearch-compatible search service.
#[derive(Clone)]
pub struct ElasticClient {
    /// Base URL of the service
    base_url: String,

    /// Optional API key
    api_key: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ElasticClient {
    /// Create a new ElasticClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.search_url.clone(),
            api_key: config.search_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create an ElasticClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn document_path(index: &str, doc_type: &str, id: &str) -> String {
        format!(
            "/{}/{}/{}",
            urlencoding::encode(index),
            urlencoding::encode(doc_type),
            urlencoding::encode(id)
        )
    }

    /// Execute a request with authentication and an optional JSON body.
    fn send(&self, method: &str, path: &str, body: Option<&Value>) -> SearchApiResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .agent
            .request(method, &url)
            .set("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.set("Authorization", &format!("ApiKey {}", key));
        }

        let timer = HttpTimer::new(self.metrics.clone());
        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                tracing::debug!("{} {} - Success (status: {})", method, url, response.status());
                timer.complete();
                Ok(response)
            }
            Err(e) => {
                timer.complete_with_error();
                let err = self.map_error(e);
                tracing::debug!("{} {} - Error: {:?}", method, url, err);
                Err(err)
            }
        }
    }

    /// Map a ureq error to a SearchApiError.
    fn map_error(&self, error: ureq::Error) -> SearchApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => SearchApiError::Unauthorized,
                    404 => SearchApiError::NotFound(message),
                    429 => SearchApiError::RateLimitExceeded,
                    _ => SearchApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                let io_kind = std::error::Error::source(&transport)
                    .and_then(|source| source.downcast_ref::<io::Error>())
                    .map(io::Error::kind);
                Self::map_transport(transport.kind(), io_kind, transport.to_string())
            }
        }
    }

    /// Only an underlying I/O timeout is reported as `Timeout`.
    fn map_transport(
        kind: ureq::ErrorKind,
        io_kind: Option<io::ErrorKind>,
        message: String,
    ) -> SearchApiError {
        match (kind, io_kind) {
            (_, Some(io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)) => SearchApiError::Timeout,
            (ureq::ErrorKind::ConnectionFailed, _) => {
                SearchApiError::HttpError("Connection failed".to_string())
            }
            _ => SearchApiError::HttpError(message),
        }
    }

    fn read_body(response: ureq::Response) -> SearchApiResult<String> {
        response
            .into_string()
            .map_err(|e| SearchApiError::HttpError(e.to_string()))
    }
}

impl SearchBackend for ElasticClient {
    fn upsert(
        &self,
        index: &str,
        doc_type: &str,
        id: &str,
        document: &Value,
    ) -> SearchApiResult<()> {
        let path = Self::document_path(index, doc_type, id);
        self.send("PUT", &path, Some(document))?;
        self.metrics.record_document_indexed();
        Ok(())
    }

    fn delete(&self, index: &str, doc_type: &str, id: &str) -> SearchApiResult<()> {
        let path = Self::document_path(index, doc_type, id);
        self.send("DELETE", &path, None)?;
        self.metrics.record_document_removed();
        Ok(())
    }

    fn get(&self, index: &str, doc_type: &str, id: &str) -> SearchApiResult<Option<Value>> {
        let path = Self::document_path(index, doc_type, id);
        let response = match self.send("GET", &path, None) {
            Ok(response) => response,
            Err(SearchApiError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let body = Self::read_body(response)?;
        let document: RawGetResponse = serde_json::from_str(&body)?;
        if !document.found {
            return Ok(None);
        }
        Ok(document.source)
    }

    fn search(&self, index: &str, request: &SearchRequest) -> SearchApiResult<SearchResponse> {
        let mut path = format!("/{}/_search", urlencoding::encode(index));
        if request.pretty {
            path.push_str("?pretty=true");
        }

        let response = self.send("POST", &path, Some(&request.source()))?;
        let body = Self::read_body(response)?;
        let raw: RawSearchResponse = serde_json::from_str(&body)?;
        let response = raw.into_response();

        let returned = response.hits.as_ref().map_or(0, |h| h.hits.len());
        self.metrics.record_search(returned);
        Ok(response)
    }
}
