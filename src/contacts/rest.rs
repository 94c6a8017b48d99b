//! REST API for the phonebook service.
//!
//! Endpoints:
//! - `GET /getContacts` — next page of the wrap-around table scan
//! - `POST /addContact` — insert a contact from a JSON body
//! - `DELETE /deleteContact/:phone_number` — delete by exact phone number
//! - `GET /searchContact/:phone_number` — exact-match search
//! - `PUT /editContact/:phone_number` — rewrite all fields by phone number
//!
//! Domain outcomes (validation failure, not found, no results) render as a
//! success status with a human-readable `message`; only a storage
//! malfunction on the read paths surfaces as a server error.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use super::cursor::PageCursor;
use super::store::{Contact, ContactDraft, ContactError, ContactStore};

/// Message returned when a retrieval reaches the end of the table and the
/// cursor wraps to the start.
pub const END_OF_TABLE_MESSAGE: &str = "end of table, move to the start";

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ContactStore>,
    cursor: Arc<PageCursor>,
    page_size: u64,
}

/// Start the REST server on the given host and port.
///
/// When `port` is 0, the OS assigns an ephemeral port. The actual bound
/// port is always logged so it can be discovered.
pub async fn serve(
    store: Arc<dyn ContactStore>,
    cursor: Arc<PageCursor>,
    page_size: u64,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(store, cursor, page_size);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let actual_port = listener.local_addr()?.port();
    info!(port = actual_port, page_size, "phonebook REST API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the axum router (separated for testing).
pub fn router(store: Arc<dyn ContactStore>, cursor: Arc<PageCursor>, page_size: u64) -> Router {
    // CORS layer for the browser frontend (served from a different origin)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/getContacts", get(list_contacts))
        .route("/addContact", post(add_contact))
        .route("/deleteContact/:phone_number", delete(delete_contact))
        .route("/searchContact/:phone_number", get(search_contact))
        .route("/editContact/:phone_number", put(edit_contact))
        .layer(cors)
        .with_state(AppState {
            store,
            cursor,
            page_size,
        })
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<ContactsResponse>, (StatusCode, String)> {
    let offset = state.cursor.advance(state.page_size);

    let contacts = state.store.list(state.page_size, offset).await.map_err(|e| {
        error!(offset, error = %e, "failed to list contacts");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database query error: {}", e),
        )
    })?;

    // A short page means the scan reached the end of the table; wrap the
    // cursor so the next call starts over.
    let message = if (contacts.len() as u64) < state.page_size {
        state.cursor.reset();
        END_OF_TABLE_MESSAGE.to_string()
    } else {
        String::new()
    };

    Ok(Json(ContactsResponse { message, contacts }))
}

async fn add_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactDraft>, JsonRejection>,
) -> Json<MessageResponse> {
    let Ok(Json(draft)) = body else {
        return MessageResponse::new(
            "Invalid request body. Please provide correct JSON format.",
        );
    };

    match state.store.insert(&draft).await {
        Ok(id) => {
            info!(id, "contact added");
            MessageResponse::new("Contact was added successfully")
        }
        Err(ContactError::Validation(n)) => MessageResponse::new(format!(
            "{} field(s) are empty. Please provide all required fields.",
            n
        )),
        Err(e) => {
            error!(error = %e, "failed to add contact");
            MessageResponse::new("Database error occurred while adding the contact.")
        }
    }
}

async fn delete_contact(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> Json<MessageResponse> {
    match state.store.delete(&phone_number).await {
        Ok(count) => MessageResponse::new(format!("{} contact(s) were deleted", count)),
        Err(e) => {
            // Not-found and storage failure collapse into one user-facing
            // message on the mutation paths.
            warn!(%phone_number, error = %e, "delete matched nothing");
            MessageResponse::new("The number provided is not in the phone book")
        }
    }
}

async fn search_contact(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> Result<Json<ContactsResponse>, (StatusCode, String)> {
    match state.store.search(&phone_number).await {
        Ok(contacts) => Ok(Json(ContactsResponse {
            message: format!(
                "{} contacts with the given phone number were found",
                contacts.len()
            ),
            contacts,
        })),
        // Zero matches is a normal, explained empty result.
        Err(ContactError::NoResults) => Ok(Json(ContactsResponse {
            message: "No contacts were found with the given phone number".to_string(),
            contacts: Vec::new(),
        })),
        Err(e) => {
            error!(%phone_number, error = %e, "failed to search contacts");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database query error: {}", e),
            ))
        }
    }
}

async fn edit_contact(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
    body: Result<Json<ContactDraft>, JsonRejection>,
) -> Json<MessageResponse> {
    let Ok(Json(draft)) = body else {
        return MessageResponse::new(
            "Invalid request body. Please provide correct JSON format.",
        );
    };

    match state.store.update(&phone_number, &draft).await {
        Ok(count) => {
            MessageResponse::new(format!("{} contact(s) were updated successfully", count))
        }
        Err(ContactError::Validation(n)) => MessageResponse::new(format!(
            "{} field(s) are empty. Please provide all required fields.",
            n
        )),
        Err(e) => {
            warn!(%phone_number, error = %e, "edit matched nothing");
            MessageResponse::new("The number provided is not in the phone book")
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Response carrying only a human-readable outcome message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Response carrying a message plus the matching contacts.
#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    pub message: String,
    pub contacts: Vec<Contact>,
}
