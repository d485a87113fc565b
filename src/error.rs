use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type. Every handler returns `Result<_, AppError>`
/// and the `IntoResponse` impl decides the status code and JSON body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Item not found")]
    ItemNotFound,

    // The sign-in contract reports a missing account as a 400, not a 404.
    #[error("User not found")]
    UserNotFound,

    #[error("This email is already in use")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied, token missing")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Only the item's creator can do that")]
    Forbidden,

    #[error("Bidding is closed for this item")]
    BiddingClosed,

    #[error("Bid must be higher than current bid")]
    BidTooLow,

    #[error("{0}")]
    Validation(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error")]
    Hash,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ItemNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::UserNotFound => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DuplicateEmail => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::MissingToken => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::BiddingClosed => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BidTooLow => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                // A unique violation on users.email means a sign-up raced the
                // application-layer duplicate check; report it as such.
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(json!({"error": "This email is already in use"})),
                        )
                            .into_response();
                    }
                }
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Jwt(e) => {
                tracing::error!(error = %e, "jwt error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Token error".to_string())
            }
            AppError::Hash => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        assert_eq!(
            AppError::ItemNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::UserNotFound.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DuplicateEmail.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::MissingToken.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::BiddingClosed.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BidTooLow.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
