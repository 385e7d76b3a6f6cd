//! Domain value objects and types.
//!
//! The contact identifier wrapper, validated at construction time, and the
//! email syntax check used by the validator.

pub mod contact_id;
pub mod email;
pub mod errors;

pub use contact_id::ContactId;
pub use email::is_valid_email;
pub use errors::ValidationError;
