//! Storage backend implementations of the contact store.
//!
//! Each backend lives in its own module, feature-gated so a build only
//! pulls in the drivers it needs.

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;
