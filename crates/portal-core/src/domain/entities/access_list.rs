//! Access list entity.

use crate::AccessListId;
use serde::{Deserialize, Serialize};

/// A named permission set granting visibility into checkpoints and menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessList {
    /// Unique identifier.
    pub id: AccessListId,

    /// Display name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,
}

impl AccessList {
    /// Creates an access list.
    #[must_use]
    pub fn new(id: AccessListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
