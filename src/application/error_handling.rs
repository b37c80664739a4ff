// src/application/error_handling.rs
//
// Error responses for the form screens
//
// - Every failure is mapped to one UI category
// - Store refusals keep their message verbatim; the forms show it as-is
// - Infrastructure failures are logged in full and summarised for the UI

use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Empty field, unknown reference, or Show linked to both a Screening and a Film
    Validation,

    /// No record with the given key
    NotFound,

    /// Delete refused while other records still point at the target
    Dependency,

    /// Marketing database or pool failure
    Database,

    Internal,
}

pub type CommandResult<T> = Result<T, ErrorResponse>;

impl ErrorResponse {
    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }

    pub fn from_domain_error(error: DomainError) -> Self {
        let message = error.to_string();
        match error {
            DomainError::Validation { rule, .. } => {
                Self::new(ErrorType::Validation, message, Some(rule.to_string()))
            }
            DomainError::NotFound { .. } => Self::new(ErrorType::NotFound, message, None),
            DomainError::Dependency { .. } => Self::new(ErrorType::Dependency, message, None),
        }
    }

    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self::from_domain_error(domain_error),

            AppError::Database(db_error) => {
                error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                error!("Connection pool error: {}", pool_error);
                Self::new(
                    ErrorType::Database,
                    "Database connection failed".to_string(),
                    None,
                )
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);
                Self::new(
                    ErrorType::Internal,
                    "Data serialization failed".to_string(),
                    None,
                )
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::Internal,
                    "File system operation failed".to_string(),
                    Some(io_error.to_string()),
                )
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found.", resource), None)
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        Self::from_domain_error(error)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> CommandResult<T>;
}

impl<T, E> ToErrorResponse<T> for Result<T, E>
where
    E: Into<ErrorResponse>,
{
    fn to_error_response(self) -> CommandResult<T> {
        self.map_err(Into::into)
    }
}
