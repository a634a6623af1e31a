//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service layer returns [`AppError`]. Handlers
//! propagate it with `?` and axum renders it through [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": { "code": "abc" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::unique_violation_field;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected before any storage interaction.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A `long_url` that is already mapped was inserted again.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The candidate short code is already taken.
    ///
    /// Consumed by the creation retry loop; reaching a client means a bug.
    #[error("short code '{code}' is already taken")]
    CodeCollision { code: String },

    /// No free short code was found within the attempt budget.
    #[error("failed to generate a unique short code after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } | AppError::CodeCollision { .. } => StatusCode::CONFLICT,
            AppError::CapacityExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its wire representation.
    pub fn to_error_info(&self) -> ErrorInfo {
        let message = self.to_string();

        match self {
            AppError::Validation { details, .. } => ErrorInfo {
                code: "validation_error",
                message,
                details: details.clone(),
            },
            AppError::NotFound { details, .. } => ErrorInfo {
                code: "not_found",
                message,
                details: details.clone(),
            },
            AppError::Conflict { details, .. } => ErrorInfo {
                code: "conflict",
                message,
                details: details.clone(),
            },
            AppError::CodeCollision { code } => ErrorInfo {
                code: "code_collision",
                message,
                details: json!({ "short_code": code }),
            },
            AppError::CapacityExhausted { attempts } => ErrorInfo {
                code: "capacity_exhausted",
                message,
                details: json!({ "attempts": attempts }),
            },
            AppError::Internal { details, .. } => ErrorInfo {
                code: "internal_error",
                message,
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match unique_violation_field(&e) {
            Some(field) => AppError::conflict(
                "Unique constraint violation",
                json!({ "field": field.as_str() }),
            ),
            None => {
                tracing::error!("Database error: {}", e);
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CapacityExhausted { attempts: 10 }.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::CodeCollision {
                code: "abcde".to_string()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::not_found("Short link not found", json!({ "code": "TEST" }))
            .to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Short link not found");
        assert_eq!(info.details["code"], "TEST");

        let info = AppError::CapacityExhausted { attempts: 3 }.to_error_info();
        assert_eq!(info.code, "capacity_exhausted");
        assert_eq!(info.details["attempts"], 3);
        assert!(info.message.contains("3 attempts"));
    }

    #[test]
    fn test_validation_errors_conversion() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(url)]
            long_url: String,
        }

        let probe = Probe {
            long_url: "INVALID-URL".to_string(),
        };
        let err: AppError = probe.validate().unwrap_err().into();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_error_info().details.get("long_url").is_some());
    }
}
