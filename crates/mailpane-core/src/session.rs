//! Selection and compose state over the mailbox store.
//!
//! A thin wrapper the presentation layer drives: which folder is active,
//! which message is open in the detail pane, and the draft in the compose
//! dialog. All mailbox mutations still go through the store.

use tracing::debug;

use crate::compose::Draft;
use crate::error::{Error, Result};
use crate::mailbox::{Folder, MailboxStore};
use crate::message::Message;

/// Interactive view state for a single user session.
#[derive(Debug, Clone)]
pub struct MailboxSession {
    store: MailboxStore,
    current_folder: Folder,
    selected: Option<String>,
    compose: Option<Draft>,
}

impl MailboxSession {
    /// Starts a session on the inbox with nothing selected.
    #[must_use]
    pub const fn new(store: MailboxStore) -> Self {
        Self {
            store,
            current_folder: Folder::Inbox,
            selected: None,
            compose: None,
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &MailboxStore {
        &self.store
    }

    /// The active folder.
    #[must_use]
    pub const fn current_folder(&self) -> Folder {
        self.current_folder
    }

    /// Switches folders, closing any open message.
    pub fn change_folder(&mut self, folder: Folder) {
        debug!(folder = folder.as_str(), "changed folder");
        self.current_folder = folder;
        self.selected = None;
    }

    /// Lists the messages of the active folder.
    #[must_use]
    pub fn visible_messages(&self) -> Vec<&Message> {
        self.store.list_folder(self.current_folder)
    }

    /// Opens a message in the detail pane, marking it read if it is a
    /// received message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id resolves in neither
    /// collection.
    pub fn open_message(&mut self, message_id: &str) -> Result<Message> {
        // Sent messages are already read; only received ones need the flag.
        let message = match self.store.mark_read(message_id) {
            Ok(message) => message,
            Err(Error::MessageNotFound(_)) => self
                .store
                .message(message_id)
                .cloned()
                .ok_or_else(|| Error::MessageNotFound(message_id.to_string()))?,
            Err(other) => return Err(other),
        };
        self.selected = Some(message.id.clone());
        Ok(message)
    }

    /// Closes the detail pane.
    pub fn close_message(&mut self) {
        self.selected = None;
    }

    /// The message open in the detail pane, if any.
    #[must_use]
    pub fn selected_message(&self) -> Option<&Message> {
        self.selected.as_deref().and_then(|id| self.store.message(id))
    }

    /// Toggles the star on a received message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id is absent from the
    /// received collection.
    pub fn toggle_star(&mut self, message_id: &str) -> Result<Message> {
        self.store.toggle_star(message_id)
    }

    /// Deletes a message, closing the detail pane if it was open on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id is absent from the
    /// received collection.
    pub fn delete_message(&mut self, message_id: &str) -> Result<Message> {
        let removed = self.store.delete_message(message_id)?;
        if self.selected.as_deref() == Some(message_id) {
            self.selected = None;
        }
        Ok(removed)
    }

    /// Opens the compose dialog with an empty draft.
    pub fn open_compose(&mut self) -> &mut Draft {
        self.compose.insert(Draft::new())
    }

    /// Opens the compose dialog with a reply to the given message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id resolves in neither
    /// collection.
    pub fn open_reply(&mut self, message_id: &str) -> Result<&Draft> {
        let original = self
            .store
            .message(message_id)
            .ok_or_else(|| Error::MessageNotFound(message_id.to_string()))?;
        Ok(self.compose.insert(Draft::reply(original)))
    }

    /// Opens the compose dialog with a forward of the given message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id resolves in neither
    /// collection.
    pub fn open_forward(&mut self, message_id: &str) -> Result<&Draft> {
        let original = self
            .store
            .message(message_id)
            .ok_or_else(|| Error::MessageNotFound(message_id.to_string()))?;
        Ok(self.compose.insert(Draft::forward(original)))
    }

    /// The draft in the compose dialog, if open.
    #[must_use]
    pub const fn draft(&self) -> Option<&Draft> {
        self.compose.as_ref()
    }

    /// Mutable access to the open draft for the compose form.
    pub const fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.compose.as_mut()
    }

    /// Discards the open draft.
    pub fn close_compose(&mut self) {
        self.compose = None;
    }

    /// Commits the open draft to the sent collection and closes the
    /// dialog. Returns `None` when no draft is open.
    pub fn send(&mut self) -> Option<Message> {
        let draft = self.compose.take()?;
        Some(self.store.send_message(draft))
    }
}
