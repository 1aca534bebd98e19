//! # mailpane-core
//!
//! Mailbox state model for the Mailpane webmail client.
//!
//! This crate provides:
//! - Message, user, label, and group data models
//! - The mailbox store: folder views over received/sent collections plus
//!   the mutation operations (mark read, toggle star, delete, send)
//! - Compose drafts with reply/forward derivation and group recipients
//! - Session state (active folder, open message, open draft)
//! - Display formatting (byte sizes, previews, initials)
//!
//! Everything is in-memory and synchronous: a single logical actor issues
//! operations, each runs to completion, and there is no transport or
//! persistence behind the store.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod compose;
mod error;
pub mod format;
pub mod mailbox;
pub mod message;
pub mod sample;
mod session;

pub use compose::Draft;
pub use error::{Error, Result};
pub use format::format_bytes;
pub use mailbox::{Folder, MailboxStore};
pub use message::{Attachment, EmailGroup, Label, Message, User};
pub use session::MailboxSession;
