use crate::domain::model::Resolution;
use crate::utils::error::LocatorError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const NO_MATCH_MESSAGE: &str = "No matching building code or digits";

#[derive(Debug, Default, Deserialize)]
pub struct GlbPathRequest {
    pub building_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
}

/// Success envelope of `POST /api/glb-path`.
#[derive(Debug, Serialize)]
pub struct GlbPathResponse {
    pub success: bool,
    #[serde(flatten)]
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl From<Resolution> for GlbPathResponse {
    fn from(resolution: Resolution) -> Self {
        let matched = resolution.is_match();
        Self {
            success: matched,
            resolution,
            error: (!matched).then_some(NO_MATCH_MESSAGE),
        }
    }
}

/// Maps core failures onto status codes. Store failures use 503 so clients
/// can tell them apart from a bad request and from a miss.
#[derive(Debug)]
pub struct ApiError(pub LocatorError);

impl From<LocatorError> for ApiError {
    fn from(err: LocatorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LocatorError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            LocatorError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, category = ?self.0.category(), "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Rejected request");
        }

        let body = json!({
            "success": false,
            "error": self.0.user_friendly_message(),
        });
        (status, Json(body)).into_response()
    }
}
