//! ContactStore trait and record types.
//!
//! Pluggable backing store for contact records. Implementations exist for
//! SQLite and PostgreSQL, feature-gated on their respective storage backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for contact store operations.
pub type Result<T> = std::result::Result<T, ContactError>;

/// Errors from contact store operations.
///
/// `Validation`, `NotFound`, and `NoResults` are domain outcomes the REST
/// layer renders as user-facing messages; only `Database` represents a
/// genuine storage malfunction.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// One or more required fields were empty; carries the count.
    #[error("{0} field(s) are empty")]
    Validation(usize),

    /// An update or delete matched zero rows.
    #[error("phone number not in the phone book")]
    NotFound,

    /// A search matched zero rows.
    #[error("no contacts match the given phone number")]
    NoResults,

    #[error("database error: {0}")]
    Database(String),
}

#[cfg(any(feature = "sqlite", feature = "postgres"))]
impl From<sqlx::Error> for ContactError {
    fn from(err: sqlx::Error) -> Self {
        ContactError::Database(err.to_string())
    }
}

/// A stored contact record.
///
/// `id` is assigned by storage on insert and immutable thereafter.
/// `phone_number` is the external lookup key but is not unique: several
/// records may share a number, and an edit may rewrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
}

/// An incoming contact body, before storage has assigned an id.
///
/// Missing JSON keys deserialize to empty strings and are counted as
/// missing by [`ContactDraft::missing_fields`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
}

impl ContactDraft {
    /// Count the required fields that are empty.
    pub fn missing_fields(&self) -> usize {
        [
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.address,
        ]
        .iter()
        .filter(|f| f.is_empty())
        .count()
    }

    /// Reject the draft unless all four fields are non-empty.
    pub fn validate(&self) -> Result<()> {
        match self.missing_fields() {
            0 => Ok(()),
            n => Err(ContactError::Validation(n)),
        }
    }
}

/// Pluggable backing store for contact records.
///
/// Each method maps to a single parameterized statement; there is no
/// multi-step protocol and no transaction spanning calls. Two concurrent
/// writes racing on the same phone number interleave with last-write-wins
/// semantics.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    /// Create the contacts table and indexes if they don't exist.
    async fn init_schema(&self) -> Result<()>;

    /// Retrieve one page of contacts ordered by id, bounded by `limit`
    /// and skipping `offset` rows.
    ///
    /// An empty page is a normal outcome, not an error; end-of-data is
    /// the caller's to detect by comparing the page length to `limit`.
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Contact>>;

    /// Validate and insert a contact, returning the storage-assigned id.
    ///
    /// Fails with [`ContactError::Validation`] when any field is empty;
    /// no row is inserted in that case.
    async fn insert(&self, draft: &ContactDraft) -> Result<i64>;

    /// Retrieve every contact whose phone number exactly equals the
    /// argument.
    ///
    /// Fails with [`ContactError::NoResults`] when nothing matches.
    async fn search(&self, phone_number: &str) -> Result<Vec<Contact>>;

    /// Validate the draft, then rewrite all four fields (including the
    /// phone number itself) on every row currently matching `phone_number`.
    ///
    /// Returns the affected-row count. Fails with
    /// [`ContactError::NotFound`] when zero rows match.
    async fn update(&self, phone_number: &str, draft: &ContactDraft) -> Result<u64>;

    /// Delete every row matching `phone_number`, returning the count.
    ///
    /// Fails with [`ContactError::NotFound`] when zero rows match.
    async fn delete(&self, phone_number: &str) -> Result<u64>;
}
