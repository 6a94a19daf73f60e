//! Conversion of chart errors into HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, warn};
use wxchart_common::ChartError;

use crate::metrics;

/// Handler error. Every variant becomes a short plain-text response.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ChartError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        metrics::record_error(self.0.kind());
        if status.is_server_error() {
            warn!(status = status.as_u16(), kind = self.0.kind(), error = %self.0, "Request failed");
        } else {
            debug!(status = status.as_u16(), kind = self.0.kind(), error = %self.0, "Request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.response_body(),
        )
            .into_response()
    }
}
