//! Data models for contacts and the envelopes that carry them.
//!
//! The serde representation of [`Contact`] is the document stored in the
//! search index.

pub mod address;
pub mod contact;
pub mod note;
pub mod rpc;

pub use address::{Address, Position};
pub use contact::{Contact, FieldErrors};
pub use note::{Note, Tag};
pub use rpc::{ContactArgs, ContactReply, SearchArgs, SearchQuery, SearchReply};
