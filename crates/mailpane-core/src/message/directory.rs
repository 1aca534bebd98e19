//! Label and group reference data.
//!
//! Both are read-only from the store's perspective: labels tag messages by
//! identifier, and groups pre-populate a draft's recipient list with a
//! one-shot copy of their members.

use serde::{Deserialize, Serialize};

use super::model::User;

/// A tag attachable to a message by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Presentation color token (e.g. "#10b981").
    pub color: String,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A named, reusable list of users for pre-populating draft recipients.
///
/// Selecting a group copies its members; later edits to the group do not
/// propagate to drafts already populated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailGroup {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered member list.
    pub members: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_new() {
        let label = Label::new("work", "Work", "#f59e0b");
        assert_eq!(label.id, "work");
        assert_eq!(label.name, "Work");
        assert_eq!(label.color, "#f59e0b");
    }
}
