//! Menu item and classifier entities.

use crate::{ClassifierId, MenuId};
use serde::{Deserialize, Serialize};

/// A typed key/value categorization record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifier {
    /// Unique identifier.
    pub id: ClassifierId,

    /// Classifier value.
    pub value: String,

    /// Classifier type (`cla_type`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Classifier {
    /// Creates a classifier.
    #[must_use]
    pub fn new(id: ClassifierId, value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            kind: kind.into(),
        }
    }
}

/// A navigable entry of the portal menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier.
    pub id: MenuId,

    /// Hierarchical path, e.g. `Admin > Users`.
    pub path: String,

    /// Target URL.
    pub url: Option<String>,

    /// Description.
    pub description: Option<String>,

    /// Icon name.
    pub icon: Option<String>,

    /// Parent menu; `MenuId(0)` for top-level entries.
    pub root: MenuId,

    /// Whether the entry is shown.
    pub visible: bool,

    /// Category of the entry.
    pub classifier: Classifier,

    /// Position within an access list, when loaded through one.
    pub order: Option<i32>,
}

impl MenuItem {
    /// Creates a visible, top-level menu item.
    #[must_use]
    pub fn new(id: MenuId, path: impl Into<String>, classifier: Classifier) -> Self {
        Self {
            id,
            path: path.into(),
            url: None,
            description: None,
            icon: None,
            root: MenuId::default(),
            visible: true,
            classifier,
            order: None,
        }
    }

    /// Sets the position used when linking to an access list.
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the parent entry.
    #[must_use]
    pub fn with_root(mut self, root: MenuId) -> Self {
        self.root = root;
        self
    }

    /// Returns true if the entry has no parent.
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        !self.root.is_positive()
    }

    /// Order value persisted on the link row.
    #[must_use]
    pub fn link_order(&self) -> i32 {
        self.order.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(ClassifierId(1), "ADMIN", "MENU_GROUP")
    }

    #[test]
    fn test_new_menu_item_is_top_level() {
        let item = MenuItem::new(MenuId(5), "Admin", classifier());
        assert!(item.is_top_level());
        assert!(item.visible);
        assert!(!item.with_root(MenuId(2)).is_top_level());
    }

    #[test]
    fn test_link_order_defaults_to_zero() {
        let item = MenuItem::new(MenuId(5), "Admin", classifier());
        assert_eq!(item.link_order(), 0);
        assert_eq!(item.with_order(4).link_order(), 4);
    }

    #[test]
    fn test_classifier_kind_serializes_as_type() {
        let json = serde_json::to_value(classifier()).unwrap();
        assert_eq!(json["type"], "MENU_GROUP");
    }
}
