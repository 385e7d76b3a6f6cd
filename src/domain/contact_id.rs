//! ContactId value object.

use super::errors::ValidationError;
use std::fmt;
use std::num::NonZeroU64;

/// The identifier a contact is stored and indexed under.
///
/// The primary store assigns identifiers starting at 1; `0` means the contact
/// was never persisted and therefore cannot be addressed in the index.
///
/// # Example
///
/// ```
/// use contacts_search::domain::ContactId;
///
/// let id = ContactId::try_from(42).unwrap();
/// assert_eq!(id.as_document_id(), "42");
/// assert!(ContactId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(NonZeroU64);

impl ContactId {
    /// Get the raw numeric identifier.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Render the identifier as the search index document id.
    pub fn as_document_id(self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<u64> for ContactId {
    type Error = ValidationError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(id).map(Self).ok_or(ValidationError::EmptyId)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
