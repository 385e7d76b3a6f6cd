mod mock_search_backend;

pub use mock_search_backend::MockSearchBackend;
