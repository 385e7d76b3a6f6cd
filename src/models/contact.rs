//! Contact model: the canonical record shared by the primary store and the search index.

use super::{Address, Note, Tag};
use crate::domain::{is_valid_email, ContactId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Field name to human-readable reason. Empty means the contact is valid.
pub type FieldErrors = BTreeMap<String, String>;

/// A contact as persisted by the primary store and mirrored into the search index.
///
/// The JSON form is the search document: absent optional fields are omitted,
/// never written as `null`. Missing keys decode to their default so partial
/// documents from the index still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Contact {
    /// Identifier assigned by the primary store (0 until persisted)
    pub id: u64,

    pub firstname: String,

    pub surname: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub married_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    /// Voting intention recorded during canvassing
    pub vote: String,

    /// Level of support recorded during canvassing
    pub support: String,

    /// Owning group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    /// Owning user, for contacts kept outside any group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<Note>,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<Tag>,
}

impl Contact {
    /// Create an unpersisted contact with the two required names.
    pub fn new(firstname: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            surname: surname.into(),
            ..Default::default()
        }
    }

    /// Resolve the identifier the contact is indexed under.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` while the contact has not been persisted.
    pub fn contact_id(&self) -> Result<ContactId, ValidationError> {
        ContactId::try_from(self.id)
    }

    /// Check the contact before it is written.
    ///
    /// Both names are required once surrounding whitespace is removed; a mail
    /// address, when present, must be syntactically valid. Nothing else is
    /// constrained.
    pub fn validate(&self) -> FieldErrors {
        let mut errs = FieldErrors::new();

        if self.firstname.trim().is_empty() {
            errs.insert("firstname".to_string(), "is required".to_string());
        }

        if self.surname.trim().is_empty() {
            errs.insert("surname".to_string(), "is required".to_string());
        }

        if let Some(mail) = &self.mail {
            if !is_valid_email(mail) {
                errs.insert("mail".to_string(), "is not valid".to_string());
            }
        }

        errs
    }

    /// Whether `validate` reports no errors.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
