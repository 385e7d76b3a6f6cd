//! Free-text contact search through the document-search service.

use crate::client::{Hit, MultiMatchQuery, SearchBackend, SearchRequest, CONTACTS_INDEX};
use crate::error::{ContactsError, ContactsResult};
use crate::models::Contact;
use serde::de::Error as _;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Field always searched alongside the caller's field.
pub const SECONDARY_FIELD: &str = "firstname";

/// Results come back ordered by this field, ascending.
pub const SORT_FIELD: &str = "surname";

/// Runs contact searches and decodes the hits.
#[derive(Clone)]
pub struct SearchGateway {
    backend: Arc<dyn SearchBackend>,
}

impl SearchGateway {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// The request issued for `query` on `field`.
    ///
    /// `field` and [`SECONDARY_FIELD`] are searched as one combined field and
    /// every term of `query` must match.
    pub fn build_request(query: &str, field: &str) -> SearchRequest {
        let mut request =
            SearchRequest::new(MultiMatchQuery::cross_fields(query, [field, SECONDARY_FIELD]));
        request.sort_field = Some(SORT_FIELD.to_string());
        request.sort_ascending = true;
        request.pretty = true;
        request
    }

    /// Search contacts, returned in the order the service sorted them.
    ///
    /// A response without a hits container gives an empty list.
    ///
    /// # Errors
    ///
    /// `SearchFailed` if the request fails. `DecodeFailed` as soon as one hit
    /// cannot be decoded; no partial list is returned.
    pub fn search_contacts(&self, query: &str, field: &str) -> ContactsResult<Vec<Contact>> {
        let request = Self::build_request(query, field);
        debug!(query, field, "searching contacts");

        let response = self
            .backend
            .search(CONTACTS_INDEX, &request)
            .map_err(|source| {
                error!(query, field, error = %source, "contact search failed");
                ContactsError::SearchFailed {
                    query: query.to_string(),
                    field: field.to_string(),
                    source,
                }
            })?;

        let Some(hits) = response.hits else {
            info!(query, field, "search returned no hits container");
            return Ok(Vec::new());
        };

        let contacts = hits
            .hits
            .iter()
            .map(Self::decode_hit)
            .collect::<ContactsResult<Vec<_>>>()?;

        info!(query, field, count = contacts.len(), total = hits.total, "search completed");
        Ok(contacts)
    }

    fn decode_hit(hit: &Hit) -> ContactsResult<Contact> {
        let decoded = match &hit.source {
            Some(source) => serde_json::from_str::<Contact>(source),
            None => Err(serde_json::Error::custom("hit carries no stored document")),
        };

        decoded.map_err(|source| {
            error!(hit_id = %hit.id, error = %source, "failed to decode search hit");
            ContactsError::DecodeFailed {
                hit_id: hit.id.clone(),
                source,
            }
        })
    }
}
