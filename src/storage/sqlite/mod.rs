//! SQLite storage backend.

mod contact_store;

pub use contact_store::SqliteContactStore;
