//! Message data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format;

/// Number of body characters shown in the message-list preview row.
const PREVIEW_CHARS: usize = 100;

/// An identity record for a mail participant.
///
/// Users are immutable once created and referenced by `id` equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Creates a new user without an avatar.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Returns a display string for the user.
    ///
    /// If a name is present, returns "Name <email>", otherwise just "email".
    #[must_use]
    pub fn display(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }

    /// Returns up to two uppercase initials for avatar fallback rendering.
    #[must_use]
    pub fn initials(&self) -> String {
        format::initials(&self.name)
    }
}

/// A file attached to a message.
///
/// Immutable; owned by the message that lists it. The `url` is an opaque
/// content reference supplied by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Identifier unique within the owning message.
    pub id: String,
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Opaque content reference.
    pub url: String,
}

impl Attachment {
    /// Returns the size formatted as a human-readable string.
    ///
    /// Pure formatting; the stored byte count is untouched.
    #[must_use]
    pub fn display_size(&self) -> String {
        format::format_bytes(self.size)
    }
}

/// An email record.
///
/// Lives in exactly one of the two top-level collections (received or
/// sent); folder membership beyond that is always computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Globally unique, stable identifier.
    pub id: String,
    /// Sender.
    pub from: User,
    /// Primary recipients.
    pub to: Vec<User>,
    /// CC recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<User>,
    /// BCC recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<User>,
    /// Subject line.
    pub subject: String,
    /// Plain-text body; paragraphs separated by newlines.
    pub body: String,
    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// When the message was sent or received.
    pub date: DateTime<Utc>,
    /// Whether the message has been read.
    pub read: bool,
    /// Whether the message is starred.
    pub starred: bool,
    /// Whether the message is marked important.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
    /// Label identifiers attached to the message. Identifiers that do not
    /// resolve against the current label set are simply not rendered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Whether a reply has been sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied: Option<bool>,
    /// Whether the message has been forwarded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarded: Option<bool>,
    /// Group used to populate the recipient list, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Message {
    /// Returns the body truncated for display in the message list.
    #[must_use]
    pub fn preview(&self) -> &str {
        format::truncate_chars(&self.body, PREVIEW_CHARS)
    }

    /// Whether the message carries any attachments.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Whether the message is marked important.
    #[must_use]
    pub fn is_important(&self) -> bool {
        self.important == Some(true)
    }
}
