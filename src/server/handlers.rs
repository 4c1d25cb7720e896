use super::types::{ErrorResponse, HealthResponse, ListingResponse};
use crate::{
    Error,
    listing::{ListingExtractor, ListingRequest},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests allowed";
pub const NO_IMAGES_MESSAGE: &str = "No images provided.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze images.";

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<ListingExtractor>,
}

pub async fn analyze_photos(
    State(state): State<AppState>,
    payload: Result<Json<ListingRequest>, JsonRejection>,
) -> Result<Json<ListingResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        let err = Error::invalid_request(rejection.body_text());
        warn!("Request {} rejected: {}", request_id, err);
        error_response(&err)
    })?;

    info!(
        "Request {} received {} images for user {}",
        request_id,
        request.image_urls().len(),
        request.user_id.as_deref().unwrap_or("anonymous")
    );

    match state.extractor.extract(&request).await {
        Ok(data) => {
            info!("Request {} produced listing '{}'", request_id, data.title);
            Ok(Json(ListingResponse {
                success: true,
                data,
            }))
        }
        Err(e) => {
            if e.is_client_error() {
                warn!("Request {} rejected: {}", request_id, e);
            } else {
                error!("Failed to analyze images for request {}: {}", request_id, e);
            }
            Err(error_response(&e))
        }
    }
}

/// Maps an error to the status and caller-facing message. Upstream causes
/// are never echoed back.
pub fn error_response(error: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match error {
        Error::NoImages => (StatusCode::BAD_REQUEST, NO_IMAGES_MESSAGE),
        Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED_MESSAGE),
    };

    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }),
    )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
