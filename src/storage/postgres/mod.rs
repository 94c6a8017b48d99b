//! PostgreSQL storage backend.

mod contact_store;

pub use contact_store::PostgresContactStore;
