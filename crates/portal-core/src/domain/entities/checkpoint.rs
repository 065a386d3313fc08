//! Checkpoint entity.

use crate::CheckpointId;
use serde::{Deserialize, Serialize};

/// A named, permission-guarded feature flag.
///
/// Read-only from the data layer's point of view; only its links to access
/// lists are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Unique identifier.
    pub id: CheckpointId,

    /// Checkpoint name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,
}

impl Checkpoint {
    /// Creates a checkpoint.
    #[must_use]
    pub fn new(id: CheckpointId, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description,
        }
    }
}
