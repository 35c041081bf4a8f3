//! Domain errors
//!
//! Every variant carries a stable machine-readable code so the presentation
//! layer can map it to a transport status without re-deriving semantics.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("bike not found: {0}")]
    BikeNotFound(Uuid),

    #[error("booking overlaps with an existing booking")]
    OverlapConflict,

    #[error("another rider's booking starts at {next_start}, inside the handover buffer")]
    BufferConflict { next_start: DateTime<Utc> },

    #[error("invalid booking duration: {0}")]
    InvalidDuration(String),

    #[error("cannot cancel a booking that has started or was already cancelled")]
    CannotCancel,

    #[error("not authorized to modify this booking")]
    NotAuthorized,

    #[error("a ride is already in progress for this bike")]
    RideInProgress { user_id: String },

    #[error("no ride in progress")]
    NoRideInProgress,

    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

impl BookingError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BookingNotFound(_) => "BOOKING_NOT_FOUND",
            Self::BikeNotFound(_) => "BIKE_NOT_FOUND",
            Self::OverlapConflict => "BOOKING_OVERLAP",
            Self::BufferConflict { .. } => "BUFFER_CONFLICT",
            Self::InvalidDuration(_) => "INVALID_DURATION",
            Self::CannotCancel => "CANNOT_CANCEL",
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::RideInProgress { .. } => "RIDE_IN_PROGRESS",
            Self::NoRideInProgress => "NO_RIDE_IN_PROGRESS",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether the operation may succeed if retried. Only storage failures
    /// qualify; every other kind is deterministic for the same inputs.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type for domain operations
pub type BookingResult<T> = Result<T, BookingError>;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_kinds() -> Vec<BookingError> {
        vec![
            BookingError::BookingNotFound(Uuid::nil()),
            BookingError::BikeNotFound(Uuid::nil()),
            BookingError::OverlapConflict,
            BookingError::BufferConflict {
                next_start: Utc::now(),
            },
            BookingError::InvalidDuration("too short".into()),
            BookingError::CannotCancel,
            BookingError::NotAuthorized,
            BookingError::RideInProgress {
                user_id: "rider-1".into(),
            },
            BookingError::NoRideInProgress,
            BookingError::Storage(sea_orm::DbErr::Custom("connection reset".into())),
        ]
    }

    #[test]
    fn codes_are_distinct() {
        let errors = all_kinds();
        let codes: HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn only_storage_errors_are_transient() {
        for e in all_kinds() {
            assert_eq!(e.is_transient(), e.code() == "STORAGE_ERROR", "{e}");
        }
    }
}
