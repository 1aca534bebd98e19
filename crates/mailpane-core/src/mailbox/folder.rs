//! Folder identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of folders the mailbox exposes.
///
/// Folders are views computed over the canonical collections, never
/// separate storage. `Drafts`, `Deleted`, and `Spam` have no backing state
/// yet and list empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// The full received collection.
    #[default]
    Inbox,
    /// Received messages marked important.
    Important,
    /// Received messages that are starred.
    Starred,
    /// The sent collection, most recent first.
    Sent,
    /// Unsent drafts (no backing state yet).
    Drafts,
    /// Deleted messages (no backing state yet).
    Deleted,
    /// Spam (no backing state yet).
    Spam,
}

impl Folder {
    /// Every folder, in sidebar order.
    pub const ALL: [Self; 7] = [
        Self::Inbox,
        Self::Important,
        Self::Starred,
        Self::Sent,
        Self::Drafts,
        Self::Deleted,
        Self::Spam,
    ];

    /// Canonical lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Important => "important",
            Self::Starred => "starred",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Deleted => "deleted",
            Self::Spam => "spam",
        }
    }

    /// Capitalized display title for the list header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Important => "Important",
            Self::Starred => "Starred",
            Self::Sent => "Sent",
            Self::Drafts => "Drafts",
            Self::Deleted => "Deleted",
            Self::Spam => "Spam",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Folder {
    type Err = Error;

    /// Parses a folder identifier, rejecting anything outside the closed
    /// set rather than silently defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbox" => Ok(Self::Inbox),
            "important" => Ok(Self::Important),
            "starred" => Ok(Self::Starred),
            "sent" => Ok(Self::Sent),
            "drafts" => Ok(Self::Drafts),
            "deleted" => Ok(Self::Deleted),
            "spam" => Ok(Self::Spam),
            other => Err(Error::InvalidFolder(other.to_string())),
        }
    }
}
