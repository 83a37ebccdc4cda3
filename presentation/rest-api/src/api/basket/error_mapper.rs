use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BasketError::ProductRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "basket.product_required",
            ),
            BasketError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "basket.product_not_found",
            ),
            BasketError::SessionUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "basket.session_unavailable",
            ),
            BasketError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use business::domain::errors::RepositoryError;

    use super::*;

    #[test]
    fn should_map_missing_product_to_not_found() {
        let (status, json) = BasketError::ProductNotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "basket.product_not_found");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            BasketError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
