//! Error codes for the archive backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that appears
//! in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    ValidationError,
    BadRequest,
    InvalidSessionId,
    InvalidProfileId,
    InvalidPlayerKey,
    UnknownCandidate,

    // Tracker game rules
    /// Action not allowed in the session's current stage
    InvalidStage,
    /// A round fetch is already in flight for this session
    RoundLoading,
    RoundAlreadySolved,
    RoundNotSolved,

    // Resource not found
    SessionNotFound,
    ProfileNotFound,
    NotFound,

    // Conflicts
    UniqueViolation,
    Conflict,

    // System errors
    DbError,
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 21] = [
        Self::ValidationError,
        Self::BadRequest,
        Self::InvalidSessionId,
        Self::InvalidProfileId,
        Self::InvalidPlayerKey,
        Self::UnknownCandidate,
        Self::InvalidStage,
        Self::RoundLoading,
        Self::RoundAlreadySolved,
        Self::RoundNotSolved,
        Self::SessionNotFound,
        Self::ProfileNotFound,
        Self::NotFound,
        Self::UniqueViolation,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::DataCorruption,
        Self::ConfigError,
        Self::Internal,
    ];

    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidSessionId => "INVALID_SESSION_ID",
            Self::InvalidProfileId => "INVALID_PROFILE_ID",
            Self::InvalidPlayerKey => "INVALID_PLAYER_KEY",
            Self::UnknownCandidate => "UNKNOWN_CANDIDATE",

            Self::InvalidStage => "INVALID_STAGE",
            Self::RoundLoading => "ROUND_LOADING",
            Self::RoundAlreadySolved => "ROUND_ALREADY_SOLVED",
            Self::RoundNotSolved => "ROUND_NOT_SOLVED",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
