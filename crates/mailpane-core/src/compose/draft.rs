//! Compose draft model and reply/forward derivation.

use serde::{Deserialize, Serialize};

use crate::message::{Attachment, EmailGroup, Message, User};

/// Date format used inside quoted-header blocks.
const QUOTED_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// An unsent recipient/subject/body/attachment bundle for the compose flow.
///
/// A draft is not a persisted message until the store commits it via
/// `send_message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Primary recipients.
    pub to: Vec<User>,
    /// CC recipients.
    pub cc: Vec<User>,
    /// BCC recipients.
    pub bcc: Vec<User>,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Attached files.
    pub attachments: Vec<Attachment>,
    /// Group the recipients were copied from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Draft {
    /// Creates a new empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a reply draft from a message.
    ///
    /// Addresses the original sender, prefixes the subject with `Re: `,
    /// and quotes the original under an empty lead for the reply text.
    /// Pure derivation; the source message is untouched.
    #[must_use]
    pub fn reply(original: &Message) -> Self {
        Self {
            to: vec![original.from.clone()],
            subject: format!("Re: {}", original.subject),
            body: quoted_body("Original Message", original),
            ..Self::default()
        }
    }

    /// Derives a forward draft from a message.
    ///
    /// Recipients are left empty for the user to fill in, the subject is
    /// prefixed with `Fwd: `, and attachments are carried over unchanged
    /// (shared references to the same content, not copies).
    #[must_use]
    pub fn forward(original: &Message) -> Self {
        Self {
            subject: format!("Fwd: {}", original.subject),
            body: quoted_body("Forwarded Message", original),
            attachments: original.attachments.clone(),
            ..Self::default()
        }
    }

    /// Replaces the recipient list with a group's members.
    ///
    /// One-shot copy: later edits to the group do not reach this draft.
    pub fn select_group(&mut self, group: &EmailGroup) {
        self.to = group.members.clone();
        self.group_id = Some(group.id.clone());
    }
}

/// Renders the quoted block shared by reply and forward bodies: an empty
/// lead for new text, a header block (`From`, `Date`, `Subject`), then the
/// original body verbatim.
fn quoted_body(kind: &str, original: &Message) -> String {
    format!(
        "\n\n-------- {kind} --------\nFrom: {}\nDate: {}\nSubject: {}\n\n{}",
        original.from.name,
        original.date.format(QUOTED_DATE_FORMAT),
        original.subject,
        original.body,
    )
}
