//! Password history entity.

use crate::{PasswordHistoryId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A previously used password hash, kept to prevent reuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHistoryEntry {
    /// Database-assigned identifier; `None` until saved.
    pub id: Option<PasswordHistoryId>,

    /// Password hash (never exposed via API).
    #[serde(skip_serializing)]
    pub password: String,

    /// When the password was changed.
    pub change_date: DateTime<Utc>,

    /// Owning user.
    pub user_id: UserId,
}

impl PasswordHistoryEntry {
    /// Creates an unsaved entry stamped with the current time.
    #[must_use]
    pub fn new(user_id: UserId, password: impl Into<String>) -> Self {
        Self::at(user_id, password, Utc::now())
    }

    /// Creates an unsaved entry with an explicit change date.
    #[must_use]
    pub fn at(user_id: UserId, password: impl Into<String>, change_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            password: password.into(),
            change_date,
            user_id,
        }
    }

    /// Returns true once the entry has been persisted.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some_and(PasswordHistoryId::is_positive)
    }
}
