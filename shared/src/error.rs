use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{}", .0.body_text())]
    JsonRejection(#[from] JsonRejection),
    #[error("{}", .0.body_text())]
    QueryRejection(#[from] QueryRejection),
    #[error("{}", .0.body_text())]
    PathRejection(#[from] PathRejection),
    #[error("User already exists")]
    DuplicateEmail,
    #[error("An off day is already registered for {0}")]
    DuplicateOffDay(String),
    #[error("{0}")]
    BookingNotAllowed(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Not authorized, no valid token")]
    UnauthenticatedError,
    #[error("Not authorized as an admin")]
    ForbiddenOperation,
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database query failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::InvalidRequest(_)
            | AppError::JsonRejection(_)
            | AppError::QueryRejection(_)
            | AppError::PathRejection(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail
            | AppError::DuplicateOffDay(_)
            | AppError::BookingNotAllowed(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::UnauthenticatedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            "Something went wrong".to_string()
        } else {
            self.to_string()
        };

        (status_code, Json(json!({ "message": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_http_status() {
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::ForbiddenOperation.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::EntityNotFound("Booking not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BookingNotAllowed("already booked".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::InvalidRequest("reason is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn client_errors_keep_their_message() {
        let res = AppError::BookingNotAllowed("Republic Day".into()).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn client_errors_render_a_json_message() {
        let res = AppError::BookingNotAllowed("Republic Day".into()).into_response();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Republic Day");
    }

    #[test]
    fn server_errors_are_reported_as_500() {
        let res = AppError::NoRowsAffectedError("insert".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
