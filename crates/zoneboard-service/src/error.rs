use thiserror::Error;

use zoneboard_core::error::CoreError;

/// Rejections raised by [`crate::store::TimezoneStore`] operations.
///
/// All of these are recoverable by the caller: the store is left unchanged
/// by a rejected operation and stays usable afterwards. The messages are
/// meant for user-facing display by the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Label must not be empty")]
    EmptyLabel,

    #[error("Timezone must not be empty")]
    EmptyTimezone,

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("A record labelled \"{0}\" already exists")]
    DuplicateLabel(String),

    #[error("No record labelled \"{0}\"")]
    NotFound(String),

    #[error("The local record cannot be deleted")]
    ProtectedRecord,
}

impl StoreError {
    /// Stable machine-readable tag for API payloads.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyLabel => "empty_label",
            Self::EmptyTimezone => "empty_timezone",
            Self::UnknownTimezone(_) => "unknown_timezone",
            Self::DuplicateLabel(_) => "duplicate_label",
            Self::NotFound(_) => "not_found",
            Self::ProtectedRecord => "protected_record",
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
