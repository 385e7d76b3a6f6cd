//! Notes and tags attached to a contact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text note kept on a contact, in the order the store returns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Note {
    /// Primary-store identifier of the note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The note content
    pub content: String,

    /// When the note was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl Note {
    /// Create an undated note.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            date: None,
        }
    }
}

/// A label shared between contacts.
///
/// Ordered by id then name so a contact's tag set serializes deterministically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_note_omits_absent_fields() {
        let note = Note::new("Met at the market");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"content":"Met at the market"}"#);
    }

    #[test]
    fn test_note_date_round_trip() {
        let mut note = Note::new("Called back");
        note.id = Some(3);
        note.date = Some(Utc.with_ymd_and_hms(2015, 6, 1, 9, 30, 0).unwrap());

        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"date\":\"2015-06-01T09:30:00Z\""));
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn test_tag_ordering() {
        let mut a = Tag::new("volunteer");
        a.id = Some(2);
        let mut b = Tag::new("donor");
        b.id = Some(1);
        assert!(b < a);
        assert!(Tag::new("z") < a, "tags without id sort first");
    }
}
