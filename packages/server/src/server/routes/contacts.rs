//! Contact CRUD endpoints.
//!
//! POST   /contacts      create
//! GET    /contacts      read all
//! PUT    /contacts/:id  update (PATCH is routed here too)
//! DELETE /contacts/:id  delete
//!
//! Each handler makes exactly one store call. Any store failure becomes a
//! 500 with a fixed per-operation message; the cause only reaches the logs.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::contacts::{ContactFields, ContactRecord, StoreError};
use crate::server::app::AxumAppState;

/// The four contact operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOperation {
    Create,
    ReadAll,
    Update,
    Delete,
}

impl ContactOperation {
    /// Client-facing failure message. These strings are part of the wire
    /// contract, spelling included.
    pub fn failure_message(self) -> &'static str {
        match self {
            ContactOperation::Create => "Faild to create contact",
            ContactOperation::ReadAll => "Faild to load contact",
            ContactOperation::Update => "Failed to update contact",
            ContactOperation::Delete => "Failed to delete contact",
        }
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// A store call failed. Always rendered as 500.
#[derive(Debug)]
pub struct OperationFailed(pub ContactOperation);

impl OperationFailed {
    fn log(operation: ContactOperation, error: StoreError) -> Self {
        tracing::error!(operation = ?operation, error = %error, "Contact store operation failed");
        Self(operation)
    }
}

impl IntoResponse for OperationFailed {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.0.failure_message().to_string(),
            }),
        )
            .into_response()
    }
}

pub fn updated_message(id: &str) -> String {
    format!("Contact with id {} was successfully updated", id)
}

pub fn deleted_message(id: &str) -> String {
    format!("Contact with id {} was successfully delete", id)
}

/// POST /contacts
pub async fn create_contact(
    Extension(state): Extension<AxumAppState>,
    Json(fields): Json<ContactFields>,
) -> Result<(StatusCode, Json<ContactRecord>), OperationFailed> {
    let contact = state
        .store
        .create(fields)
        .await
        .map_err(|e| OperationFailed::log(ContactOperation::Create, e))?;

    tracing::debug!(contact_id = ?contact.get("id"), "Contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /contacts
pub async fn read_all_contacts(
    Extension(state): Extension<AxumAppState>,
) -> Result<(StatusCode, Json<Vec<ContactRecord>>), OperationFailed> {
    let contacts = state
        .store
        .read_all()
        .await
        .map_err(|e| OperationFailed::log(ContactOperation::ReadAll, e))?;

    Ok((StatusCode::OK, Json(contacts)))
}

/// PUT/PATCH /contacts/:id
pub async fn update_contact(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    Json(fields): Json<ContactFields>,
) -> Result<(StatusCode, String), OperationFailed> {
    state
        .store
        .update(&id, fields)
        .await
        .map_err(|e| OperationFailed::log(ContactOperation::Update, e))?;

    Ok((StatusCode::ACCEPTED, updated_message(&id)))
}

/// DELETE /contacts/:id
pub async fn delete_contact(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, String), OperationFailed> {
    state
        .store
        .delete(&id)
        .await
        .map_err(|e| OperationFailed::log(ContactOperation::Delete, e))?;

    Ok((StatusCode::ACCEPTED, deleted_message(&id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_are_fixed() {
        assert_eq!(
            ContactOperation::Create.failure_message(),
            "Faild to create contact"
        );
        assert_eq!(
            ContactOperation::ReadAll.failure_message(),
            "Faild to load contact"
        );
        assert_eq!(
            ContactOperation::Update.failure_message(),
            "Failed to update contact"
        );
        assert_eq!(
            ContactOperation::Delete.failure_message(),
            "Failed to delete contact"
        );
    }

    #[test]
    fn confirmation_messages_embed_the_id() {
        assert_eq!(
            updated_message("5"),
            "Contact with id 5 was successfully updated"
        );
        assert_eq!(
            deleted_message("5"),
            "Contact with id 5 was successfully delete"
        );
    }

    #[test]
    fn operation_failed_is_a_500() {
        let response = OperationFailed(ContactOperation::Delete).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
