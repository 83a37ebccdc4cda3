use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shipping::errors::ShippingError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShippingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            ShippingError::RequestFailed => "shipping.request_failed",
            ShippingError::InvalidResponse => "shipping.invalid_response",
            ShippingError::Rejected => "shipping.rejected",
        };

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::new("UpstreamError", message)),
        )
    }
}
