//! Keeps the search index copy of a contact in step with the primary store.

use crate::client::{SearchBackend, CONTACTS_INDEX, CONTACT_TYPE};
use crate::domain::ContactId;
use crate::error::{ContactsError, ContactsResult, SearchApiError};
use crate::models::Contact;
use std::sync::Arc;
use tracing::{error, info};

/// Pushes and removes contact documents, keyed by contact identifier.
///
/// Calls are not retried and not coupled to the primary store: invoke
/// [`index`](Self::index) after a successful write and
/// [`unindex`](Self::unindex) after a successful delete.
#[derive(Clone)]
pub struct IndexSynchronizer {
    backend: Arc<dyn SearchBackend>,
}

impl IndexSynchronizer {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    fn resolve_id(contact: &Contact, operation: &'static str) -> ContactsResult<ContactId> {
        contact.contact_id().map_err(|_| {
            error!(operation, "contact has no identifier");
            ContactsError::IdentifierMissing { operation }
        })
    }

    /// Upsert the contact's document under its identifier.
    ///
    /// # Errors
    ///
    /// `IdentifierMissing` if the contact was never persisted, checked before
    /// anything is sent; `IndexingFailed` if the service rejects the write.
    pub fn index(&self, contact: &Contact) -> ContactsResult<()> {
        let id = Self::resolve_id(contact, "index")?.as_document_id();

        let document = serde_json::to_value(contact).map_err(|e| ContactsError::IndexingFailed {
            operation: "index",
            id: id.clone(),
            source: SearchApiError::JsonError(e),
        })?;

        self.backend
            .upsert(CONTACTS_INDEX, CONTACT_TYPE, &id, &document)
            .map_err(|source| {
                error!(id = %id, error = %source, "failed to index contact");
                ContactsError::IndexingFailed {
                    operation: "index",
                    id: id.clone(),
                    source,
                }
            })?;

        info!(id = %id, "contact indexed");
        Ok(())
    }

    /// Delete the contact's document.
    ///
    /// # Errors
    ///
    /// `IdentifierMissing` as for [`index`](Self::index); `IndexingFailed` if
    /// the delete fails, including when no document exists under the
    /// identifier (see [`ContactsError::is_not_found`]).
    pub fn unindex(&self, contact: &Contact) -> ContactsResult<()> {
        let id = Self::resolve_id(contact, "unindex")?.as_document_id();

        self.backend
            .delete(CONTACTS_INDEX, CONTACT_TYPE, &id)
            .map_err(|source| {
                error!(id = %id, error = %source, "failed to unindex contact");
                ContactsError::IndexingFailed {
                    operation: "unindex",
                    id: id.clone(),
                    source,
                }
            })?;

        info!(id = %id, "contact unindexed");
        Ok(())
    }

    /// Read back the indexed copy of a contact, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// `IdentifierMissing` for id 0; `LookupFailed` if the read fails;
    /// `DecodeFailed` if the stored document is not a contact.
    pub fn lookup(&self, id: u64) -> ContactsResult<Option<Contact>> {
        let id = ContactId::try_from(id)
            .map_err(|_| {
                error!(operation = "lookup", "contact has no identifier");
                ContactsError::IdentifierMissing { operation: "lookup" }
            })?
            .as_document_id();

        let document = self
            .backend
            .get(CONTACTS_INDEX, CONTACT_TYPE, &id)
            .map_err(|source| {
                error!(id = %id, error = %source, "failed to look up contact");
                ContactsError::LookupFailed {
                    id: id.clone(),
                    source,
                }
            })?;

        document
            .map(|doc| {
                serde_json::from_value(doc).map_err(|source| ContactsError::DecodeFailed {
                    hit_id: id.clone(),
                    source,
                })
            })
            .transpose()
    }
}
