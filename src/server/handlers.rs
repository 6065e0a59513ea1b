//! HTTP handlers for the phonebook API.

use crate::domain::ContactId;
use crate::error::PhonebookError;
use crate::models::{Contact, ContactResponse, ContactUpdate};
use crate::server::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl PhonebookError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PhonebookError::Conflict(_) => StatusCode::CONFLICT,
            PhonebookError::NotFound(_) => StatusCode::NOT_FOUND,
            PhonebookError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PhonebookError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PhonebookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            PhonebookError::Store(e) => {
                error!("Store failure: {}", e);
                "internal store failure".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error: message,
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for PhonebookError {
    fn from(rejection: JsonRejection) -> Self {
        PhonebookError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for PhonebookError {
    fn from(rejection: PathRejection) -> Self {
        PhonebookError::InvalidRequest(rejection.body_text())
    }
}

/// Liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/phonebook`: every contact with its derived age.
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, PhonebookError> {
    let today = state.today();
    let contacts = state.service.list().await?;

    Ok(Json(
        contacts.iter().map(|c| c.to_response(today)).collect(),
    ))
}

/// `POST /api/phonebook`: add a contact; 409 when the phone number is taken.
pub async fn add_contact(
    State(state): State<AppState>,
    payload: Result<Json<Contact>, JsonRejection>,
) -> Result<Json<ContactResponse>, PhonebookError> {
    let Json(candidate) = payload?;
    let saved = state.service.add(candidate).await?;
    Ok(Json(saved.to_response(state.today())))
}

/// `PUT /api/phonebook/:id`: selective update; 404 for an unknown id.
pub async fn update_contact(
    State(state): State<AppState>,
    id: Result<Path<ContactId>, PathRejection>,
    payload: Result<Json<ContactUpdate>, JsonRejection>,
) -> Result<Json<ContactResponse>, PhonebookError> {
    let Path(id) = id?;
    let Json(update) = payload?;
    let updated = state.service.update(id, update).await?;
    Ok(Json(updated.to_response(state.today())))
}

/// `DELETE /api/phonebook/:id`: 200 with an empty body, 404 for an unknown id.
pub async fn delete_contact(
    State(state): State<AppState>,
    id: Result<Path<ContactId>, PathRejection>,
) -> Result<StatusCode, PhonebookError> {
    let Path(id) = id?;
    state.service.delete(id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use axum::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PhonebookError::Conflict("phone number taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            PhonebookError::NotFound(ContactId::new(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PhonebookError::Store(StoreError::Other("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PhonebookError::InvalidRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_into_response() {
        let response = PhonebookError::NotFound(ContactId::new(3)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["error"], "contact with id 3 does not exist");
    }

    #[tokio::test]
    async fn test_store_failure_details_are_hidden() {
        let err = PhonebookError::Store(StoreError::Other("disk full".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["error"], "internal store failure");
    }

    #[tokio::test]
    async fn test_invalid_request_into_response() {
        let response = PhonebookError::InvalidRequest("bad id".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["error"], "Invalid request: bad id");
    }
}
