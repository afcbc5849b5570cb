use salvo::http::StatusCode;
use thiserror::Error;

use zoneboard_service::error::StoreError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    ServiceError(#[from] zoneboard_service::error::ServiceError),

    #[error(transparent)]
    CoreError(#[from] zoneboard_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Maps a store rejection to its HTTP status.
///
/// Validation failures are 422, label collisions 409, missing records 404,
/// and attempts to delete the local record 403.
#[must_use]
pub fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::EmptyLabel | StoreError::EmptyTimezone | StoreError::UnknownTimezone(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        StoreError::DuplicateLabel(_) => StatusCode::CONFLICT,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::ProtectedRecord => StatusCode::FORBIDDEN,
    }
}
