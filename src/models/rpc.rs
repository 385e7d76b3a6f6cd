//! Request and reply envelopes exchanged with the gateway.

use super::Contact;
use serde::{Deserialize, Serialize};

/// Arguments of the index and unindex calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ContactArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<u64>,

    pub contact: Contact,
}

impl ContactArgs {
    pub fn new(contact: Contact) -> Self {
        Self {
            mission_id: None,
            contact,
        }
    }
}

/// Reply carrying a single contact or a list of contacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ContactReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    pub contacts: Vec<Contact>,
}

/// A free-text query against one contact field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub query: String,
    pub field: String,
}

/// Arguments of the search call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchArgs {
    pub search: SearchQuery,
}

impl SearchArgs {
    pub fn new(query: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            search: SearchQuery {
                query: query.into(),
                field: field.into(),
            },
        }
    }
}

/// Contacts matching a search, in the order the search service sorted them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SearchReply {
    pub contacts: Vec<Contact>,
}
