//! In-memory adapters for tests and embedded use.

mod repository;

pub use repository::InMemoryEventRepository;
