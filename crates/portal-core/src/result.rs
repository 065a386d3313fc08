//! Result type aliases for the portal data layer.

use crate::PortalError;

/// A specialized `Result` type for portal data operations.
pub type PortalResult<T> = Result<T, PortalError>;
