//! Contact records: domain types, store contract, pagination cursor, REST API.
//!
//! The store is a stateless façade over a relational backend; each operation
//! issues one statement and maps rows or affected-row counts into domain
//! outcomes. The only cross-request state is the [`cursor::PageCursor`]
//! shared by successive retrieval calls.

pub mod cursor;
pub mod rest;
#[cfg(any(feature = "sqlite", feature = "postgres"))]
pub mod schema;
pub mod store;
