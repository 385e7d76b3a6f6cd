//! Application service layer.
//!
//! The synchronizer and gateway hold the only dependency they need, the
//! search backend, and carry no other state between calls. The controller
//! exposes them through the request/reply envelopes.

mod controller;
mod index_sync;
mod search_gateway;

pub use controller::SearchController;
pub use index_sync::IndexSynchronizer;
pub use search_gateway::{SearchGateway, SECONDARY_FIELD, SORT_FIELD};
