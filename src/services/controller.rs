//! Request/reply façade over the synchronizer and gateway.

use super::{IndexSynchronizer, SearchGateway};
use crate::client::SearchBackend;
use crate::error::ContactsResult;
use crate::models::{ContactArgs, ContactReply, SearchArgs, SearchReply};
use std::sync::Arc;

/// The three operations offered to the gateway: `index`, `unindex` and
/// `search_contacts`.
#[derive(Clone)]
pub struct SearchController {
    sync: IndexSynchronizer,
    gateway: SearchGateway,
}

impl SearchController {
    /// Build both services on the same backend.
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            sync: IndexSynchronizer::new(backend.clone()),
            gateway: SearchGateway::new(backend),
        }
    }

    pub fn synchronizer(&self) -> &IndexSynchronizer {
        &self.sync
    }

    pub fn gateway(&self) -> &SearchGateway {
        &self.gateway
    }

    /// Index `args.contact`; the reply echoes the contact that was stored.
    pub fn index(&self, args: &ContactArgs) -> ContactsResult<ContactReply> {
        self.sync.index(&args.contact)?;
        Ok(ContactReply {
            contact: Some(args.contact.clone()),
            contacts: Vec::new(),
        })
    }

    /// Remove `args.contact` from the index.
    pub fn unindex(&self, args: &ContactArgs) -> ContactsResult<ContactReply> {
        self.sync.unindex(&args.contact)?;
        Ok(ContactReply::default())
    }

    pub fn search_contacts(&self, args: &SearchArgs) -> ContactsResult<SearchReply> {
        let contacts = self
            .gateway
            .search_contacts(&args.search.query, &args.search.field)?;
        Ok(SearchReply { contacts })
    }
}
