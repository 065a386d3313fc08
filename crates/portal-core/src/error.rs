//! Error types shared by every data access component.
//!
//! Components return the tagged [`PortalError`] so callers can decide on
//! retry or reporting policy. At the caller boundary the error is folded
//! into a single [`OperationFailure`] carrying a localized, generic message.

use crate::i18n::{codes, Locale, MessageSource};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

/// Coarse classification of a [`PortalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The database could not be reached or the connection broke.
    Connectivity,
    /// A unique, foreign key or check constraint rejected the statement.
    ConstraintViolation,
    /// A row could not be mapped to a record.
    Mapping,
    /// The statement itself was malformed.
    Statement,
    /// A delete was attempted without any predicate.
    UnscopedDelete,
    /// Invalid configuration.
    Configuration,
    /// Anything else.
    Unknown,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connectivity => "connectivity",
            Self::ConstraintViolation => "constraint_violation",
            Self::Mapping => "mapping",
            Self::Statement => "statement",
            Self::UnscopedDelete => "unscoped_delete",
            Self::Configuration => "configuration",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Unified error type for the portal data layer.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Connection, pool or transport failure.
    #[error("Database connectivity error: {0}")]
    Connectivity(String),

    /// Constraint violation reported by the database.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Row to record mapping failure.
    #[error("Row mapping error: {0}")]
    Mapping(String),

    /// Malformed statement or unbound parameter.
    #[error("Invalid statement: {0}")]
    Statement(String),

    /// Delete without any predicate.
    #[error("Refusing to delete from {table} without a predicate")]
    UnscopedDelete { table: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unclassified database error.
    #[error("Database error: {0}")]
    Unknown(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PortalError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connectivity(_) => ErrorKind::Connectivity,
            Self::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            Self::Mapping(_) => ErrorKind::Mapping,
            Self::Statement(_) => ErrorKind::Statement,
            Self::UnscopedDelete { .. } => ErrorKind::UnscopedDelete,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Unknown(_) | Self::Other(_) => ErrorKind::Unknown,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Connectivity => "DATABASE_UNAVAILABLE",
            ErrorKind::ConstraintViolation => "CONSTRAINT_VIOLATION",
            ErrorKind::Mapping => "MAPPING_ERROR",
            ErrorKind::Statement => "INVALID_STATEMENT",
            ErrorKind::UnscopedDelete => "UNSCOPED_DELETE",
            ErrorKind::Configuration => "CONFIGURATION_ERROR",
            ErrorKind::Unknown => "INTERNAL_ERROR",
        }
    }

    /// Creates a mapping error.
    #[must_use]
    pub fn mapping<T: Into<String>>(message: T) -> Self {
        Self::Mapping(message.into())
    }

    /// Creates a statement error.
    #[must_use]
    pub fn statement<T: Into<String>>(message: T) -> Self {
        Self::Statement(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }

    /// Folds this error into the caller-facing [`OperationFailure`].
    ///
    /// The message is always the generic operation failure text for the
    /// requested locale; the original detail is not carried over.
    #[must_use]
    pub fn localize(&self, messages: &dyn MessageSource, locale: &Locale) -> OperationFailure {
        OperationFailure {
            kind: self.kind(),
            code: self.error_code(),
            message: messages.message(codes::GENERIC_OPERATION_FAILURE, locale),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for PortalError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation()
                {
                    return Self::ConstraintViolation(db_err.message().to_string());
                }
                // syntax error, unknown table, unknown column
                match db_err.code().as_deref() {
                    Some("42000" | "42S02" | "42S22" | "1064" | "1054" | "1146") => {
                        Self::Statement(db_err.message().to_string())
                    }
                    _ => Self::Unknown(err.to_string()),
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connectivity(err.to_string()),
            sqlx::Error::RowNotFound
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => Self::Mapping(err.to_string()),
            sqlx::Error::Configuration(_) => Self::Configuration(err.to_string()),
            _ => Self::Unknown(err.to_string()),
        }
    }
}

/// The single failure a caller of the data layer sees.
///
/// Carries a localized generic message. The kind and code are kept so that
/// callers can still pick a retry or reporting policy.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct OperationFailure {
    /// Classification of the underlying error.
    pub kind: ErrorKind,
    /// Machine-readable error code.
    pub code: &'static str,
    /// Localized, user-facing message.
    pub message: String,
}

impl OperationFailure {
    /// Returns true if retrying the operation may succeed.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self.kind, ErrorKind::Connectivity)
    }
}

/// Converts data layer results into caller-facing results.
pub trait LocalizeResult<T> {
    /// Replaces any error with a localized [`OperationFailure`].
    fn localized(self, messages: &dyn MessageSource, locale: &Locale) -> Result<T, OperationFailure>;
}

impl<T> LocalizeResult<T> for Result<T, PortalError> {
    fn localized(self, messages: &dyn MessageSource, locale: &Locale) -> Result<T, OperationFailure> {
        self.map_err(|e| e.localize(messages, locale))
    }
}
