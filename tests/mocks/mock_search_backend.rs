use contacts_search::client::{Hit, SearchBackend, SearchHits, SearchRequest, SearchResponse};
use contacts_search::error::{SearchApiError, SearchApiResult};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// In-memory search backend for testing.
///
/// Stores documents per index and type, answers multi-match searches with
/// whole-word matching, and counts calls per operation. Failures and canned
/// search responses can be injected.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSearchBackend {
    documents: Arc<Mutex<BTreeMap<(String, String), BTreeMap<String, Value>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failures: Arc<Mutex<HashMap<String, u16>>>,
    canned_response: Arc<Mutex<Option<SearchResponse>>>,
    last_request: Arc<Mutex<Option<SearchRequest>>>,
}

#[allow(dead_code)]
impl MockSearchBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document directly, bypassing call counting.
    pub fn seed(&self, index: &str, doc_type: &str, id: &str, document: Value) {
        let mut documents = self.documents.lock().unwrap();
        documents
            .entry((index.to_string(), doc_type.to_string()))
            .or_default()
            .insert(id.to_string(), document);
    }

    /// Make every later call of `operation` fail with the given status.
    pub fn fail(&self, operation: &str, status: u16) {
        self.failures
            .lock()
            .unwrap()
            .insert(operation.to_string(), status);
    }

    /// Answer every later search with `response` instead of the stored documents.
    pub fn respond_with(&self, response: SearchResponse) {
        *self.canned_response.lock().unwrap() = Some(response);
    }

    pub fn get_call_count(&self, operation: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(operation).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    pub fn last_request(&self) -> Option<SearchRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn document_count(&self) -> usize {
        self.documents
            .lock()
            .unwrap()
            .values()
            .map(BTreeMap::len)
            .sum()
    }

    fn record_call(&self, operation: &str) -> SearchApiResult<()> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_insert(0) += 1;

        match self.failures.lock().unwrap().get(operation).copied() {
            Some(404) => Err(SearchApiError::NotFound(format!("{} failed", operation))),
            Some(status) => Err(SearchApiError::ApiError {
                status,
                message: format!("{} failed", operation),
            }),
            None => Ok(()),
        }
    }

    fn field_text(document: &Value, field: &str) -> String {
        match document.get(field) {
            Some(Value::String(s)) => s.to_lowercase(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string().to_lowercase(),
        }
    }

    /// Cross-field AND: every query term must be a word of some searched field.
    fn matches(document: &Value, request: &SearchRequest) -> bool {
        let words: Vec<String> = request
            .query
            .fields
            .iter()
            .flat_map(|field| {
                Self::field_text(document, field)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();

        let terms: Vec<String> = request
            .query
            .query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        !terms.is_empty() && terms.iter().all(|term| words.contains(term))
    }
}

impl SearchBackend for MockSearchBackend {
    fn upsert(&self, index: &str, doc_type: &str, id: &str, document: &Value) -> SearchApiResult<()> {
        self.record_call("upsert")?;
        self.seed(index, doc_type, id, document.clone());
        Ok(())
    }

    fn delete(&self, index: &str, doc_type: &str, id: &str) -> SearchApiResult<()> {
        self.record_call("delete")?;
        let mut documents = self.documents.lock().unwrap();
        documents
            .get_mut(&(index.to_string(), doc_type.to_string()))
            .and_then(|docs| docs.remove(id))
            .map(|_| ())
            .ok_or_else(|| SearchApiError::NotFound(format!("{}/{}/{}", index, doc_type, id)))
    }

    fn get(&self, index: &str, doc_type: &str, id: &str) -> SearchApiResult<Option<Value>> {
        self.record_call("get")?;
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .get(&(index.to_string(), doc_type.to_string()))
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    fn search(&self, index: &str, request: &SearchRequest) -> SearchApiResult<SearchResponse> {
        self.record_call("search")?;
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(response) = self.canned_response.lock().unwrap().clone() {
            return Ok(response);
        }

        let documents = self.documents.lock().unwrap();
        let mut found: Vec<(&String, &Value)> = documents
            .iter()
            .filter(|((idx, _), _)| idx == index)
            .flat_map(|(_, docs)| docs.iter())
            .filter(|(_, doc)| Self::matches(doc, request))
            .collect();

        if let Some(sort_field) = &request.sort_field {
            found.sort_by_key(|(_, doc)| Self::field_text(doc, sort_field));
            if !request.sort_ascending {
                found.reverse();
            }
        }

        let hits: Vec<Hit> = found
            .into_iter()
            .map(|(id, doc)| Hit::new(id.clone(), doc.to_string()))
            .collect();

        Ok(SearchResponse {
            hits: Some(SearchHits {
                total: hits.len() as u64,
                hits,
            }),
        })
    }
}
