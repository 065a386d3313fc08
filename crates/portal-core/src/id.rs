//! Typed ID wrappers for portal entities.
//!
//! All portal tables use auto-increment integer keys. A non-positive value
//! means "not set" and is never used as a filter.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from its raw value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }

            /// Returns true if this ID refers to a stored row.
            #[must_use]
            pub const fn is_positive(self) -> bool {
                self.0 > 0
            }

            /// Returns `Some(self)` if positive.
            #[must_use]
            pub const fn positive(self) -> Option<Self> {
                if self.is_positive() {
                    Some(self)
                } else {
                    None
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of an access list.
    AccessListId
);

entity_id!(
    /// Identifier of a checkpoint.
    CheckpointId
);

entity_id!(
    /// Identifier of a menu item.
    MenuId
);

entity_id!(
    /// Identifier of a classifier record.
    ClassifierId
);

entity_id!(
    /// Identifier of a portal user.
    UserId
);

entity_id!(
    /// Identifier of a password history entry.
    PasswordHistoryId
);

/// Keeps only IDs that refer to stored rows.
pub trait PositiveId: Sized {
    /// Returns `None` unless the ID is present and positive.
    fn positive_only(self) -> Self;
}

macro_rules! positive_option {
    ($($name:ident),*) => {
        $(
            impl PositiveId for Option<$name> {
                fn positive_only(self) -> Self {
                    self.and_then($name::positive)
                }
            }
        )*
    };
}

positive_option!(AccessListId, CheckpointId, MenuId, ClassifierId, UserId, PasswordHistoryId);
