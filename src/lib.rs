//! Phonebook - paginated contact record service
//!
//! A small HTTP service over a relational `contacts` table: create,
//! paged retrieval, exact-match search, update, and delete, keyed by
//! phone number. Retrieval walks the table with a shared pagination
//! cursor that wraps to the start once a short page is seen.

pub mod config;
pub mod contacts;
#[cfg(any(feature = "sqlite", feature = "postgres"))]
pub mod storage;
pub mod utils;
