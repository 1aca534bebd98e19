//! The mailbox store.

use chrono::Utc;
use tracing::{debug, warn};

use super::folder::Folder;
use crate::compose::Draft;
use crate::error::{Error, Result};
use crate::message::{EmailGroup, Label, Message, User};

/// Single source of truth for mailbox contents.
///
/// Owns the received and sent collections plus the label/group reference
/// data. All writes go through the operations here; folder membership is
/// always computed from the canonical collections. Every operation is a
/// single synchronous transition and leaves the collections untouched on
/// failure.
#[derive(Debug, Clone)]
pub struct MailboxStore {
    session_user: User,
    received: Vec<Message>,
    sent: Vec<Message>,
    labels: Vec<Label>,
    groups: Vec<EmailGroup>,
    /// Disambiguates sent ids minted within the same millisecond.
    sent_seq: u64,
}

impl MailboxStore {
    /// Creates a store over an already-populated received collection.
    ///
    /// The received collection comes from an external ingestion process and
    /// keeps whatever order it was given.
    #[must_use]
    pub fn new(
        session_user: User,
        received: Vec<Message>,
        labels: Vec<Label>,
        groups: Vec<EmailGroup>,
    ) -> Self {
        Self {
            session_user,
            received,
            sent: Vec::new(),
            labels,
            groups,
            sent_seq: 0,
        }
    }

    /// Seeds the sent collection, e.g. from a host-supplied snapshot.
    #[must_use]
    pub fn with_sent(mut self, sent: Vec<Message>) -> Self {
        self.sent = sent;
        self
    }

    /// The user on whose behalf messages are composed.
    #[must_use]
    pub const fn session_user(&self) -> &User {
        &self.session_user
    }

    /// The label reference set.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The group reference set.
    #[must_use]
    pub fn groups(&self) -> &[EmailGroup] {
        &self.groups
    }

    /// Looks up a label by identifier.
    #[must_use]
    pub fn label(&self, id: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.id == id)
    }

    /// Looks up a group by identifier.
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&EmailGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// Resolves a message's label identifiers against the label set.
    ///
    /// Identifiers with no matching label are skipped, not an error.
    #[must_use]
    pub fn resolve_labels(&self, message: &Message) -> Vec<&Label> {
        message
            .labels
            .iter()
            .filter_map(|id| self.label(id))
            .collect()
    }

    /// Looks up a message by id across both collections.
    #[must_use]
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.received
            .iter()
            .chain(self.sent.iter())
            .find(|message| message.id == id)
    }

    /// Lists the messages in a folder view.
    ///
    /// `Inbox` and `Sent` are the full backing collections; `Starred` and
    /// `Important` are predicate subsequences of the received collection.
    /// `Drafts`, `Deleted`, and `Spam` list empty until they grow backing
    /// state. Insertion order is preserved; nothing is sorted.
    #[must_use]
    pub fn list_folder(&self, folder: Folder) -> Vec<&Message> {
        match folder {
            Folder::Inbox => self.received.iter().collect(),
            Folder::Sent => self.sent.iter().collect(),
            Folder::Starred => self.received.iter().filter(|m| m.starred).collect(),
            Folder::Important => self.received.iter().filter(|m| m.is_important()).collect(),
            Folder::Drafts | Folder::Deleted | Folder::Spam => Vec::new(),
        }
    }

    /// Lists a folder by its string identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFolder`] for identifiers outside the closed
    /// folder set.
    pub fn list_folder_named(&self, name: &str) -> Result<Vec<&Message>> {
        Ok(self.list_folder(name.parse()?))
    }

    /// Number of unread received messages.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.received.iter().filter(|m| !m.read).count()
    }

    /// Number of starred received messages.
    #[must_use]
    pub fn starred_count(&self) -> usize {
        self.received.iter().filter(|m| m.starred).count()
    }

    /// Number of received messages marked important.
    #[must_use]
    pub fn important_count(&self) -> usize {
        self.received.iter().filter(|m| m.is_important()).count()
    }

    /// Marks a received message as read and returns the updated record.
    ///
    /// Idempotent: marking an already-read message changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id is absent from the
    /// received collection.
    pub fn mark_read(&mut self, message_id: &str) -> Result<Message> {
        let message = Self::find_mut(&mut self.received, message_id)?;
        message.read = true;
        debug!(id = message_id, "marked message read");
        Ok(message.clone())
    }

    /// Flips the starred flag on a received message and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id is absent from the
    /// received collection.
    pub fn toggle_star(&mut self, message_id: &str) -> Result<Message> {
        let message = Self::find_mut(&mut self.received, message_id)?;
        message.starred = !message.starred;
        debug!(id = message_id, starred = message.starred, "toggled star");
        Ok(message.clone())
    }

    /// Removes a message from the received collection and returns it.
    ///
    /// Removal is permanent; there is no trash state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the id is absent from the
    /// received collection.
    pub fn delete_message(&mut self, message_id: &str) -> Result<Message> {
        let index = self
            .received
            .iter()
            .position(|m| m.id == message_id)
            .ok_or_else(|| Error::MessageNotFound(message_id.to_string()))?;
        let removed = self.received.remove(index);
        debug!(id = message_id, "deleted message");
        Ok(removed)
    }

    /// Commits a draft as a sent message.
    ///
    /// Synthesizes a message with a fresh unique id, `from` bound to the
    /// session user and `date` set to now, then prepends it to the sent
    /// collection so the sent folder reads most-recent-first. No network
    /// transmission occurs.
    pub fn send_message(&mut self, draft: Draft) -> Message {
        if draft.to.is_empty() {
            warn!("sending a message with no recipients");
        }

        let now = Utc::now();
        let id = format!("sent-{}-{}", now.timestamp_millis(), self.sent_seq);
        self.sent_seq += 1;

        let message = Message {
            id,
            from: self.session_user.clone(),
            to: draft.to,
            cc: draft.cc,
            bcc: draft.bcc,
            subject: draft.subject,
            body: draft.body,
            attachments: draft.attachments,
            date: now,
            read: true,
            starred: false,
            important: None,
            labels: Vec::new(),
            replied: None,
            forwarded: None,
            group_id: draft.group_id,
        };

        debug!(id = %message.id, to = message.to.len(), "sent message");
        self.sent.insert(0, message.clone());
        message
    }

    fn find_mut<'a>(collection: &'a mut [Message], id: &str) -> Result<&'a mut Message> {
        collection
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| Error::MessageNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn store() -> MailboxStore {
        sample::store()
    }

    #[test]
    fn test_inbox_lists_full_received_collection_in_order() {
        let store = store();
        let inbox = store.list_folder(Folder::Inbox);
        let ids: Vec<&str> = inbox.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_starred_view_is_a_predicate_over_received() {
        let mut store = store();
        store.toggle_star("1").unwrap();

        let starred = store.list_folder(Folder::Starred);
        assert!(starred.iter().all(|m| m.starred));
        // "2" is starred in the sample data, "1" was just starred.
        let ids: Vec<&str> = starred.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_stub_folders_list_empty() {
        let store = store();
        assert!(store.list_folder(Folder::Drafts).is_empty());
        assert!(store.list_folder(Folder::Deleted).is_empty());
        assert!(store.list_folder(Folder::Spam).is_empty());
    }

    #[test]
    fn test_list_folder_named_rejects_unknown() {
        let store = store();
        let err = store.list_folder_named("outbox").unwrap_err();
        assert_eq!(err, Error::InvalidFolder("outbox".into()));
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut store = store();
        let once = store.mark_read("1").unwrap();
        let twice = store.mark_read("1").unwrap();
        assert!(once.read);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mark_read_unknown_id() {
        let mut store = store();
        let err = store.mark_read("nope").unwrap_err();
        assert_eq!(err, Error::MessageNotFound("nope".into()));
    }

    #[test]
    fn test_toggle_star_is_an_involution() {
        let mut store = store();
        let before = store.message("1").unwrap().clone();
        store.toggle_star("1").unwrap();
        let after = store.toggle_star("1").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_removes_permanently() {
        let mut store = store();
        store.delete_message("3").unwrap();

        assert!(store.list_folder(Folder::Inbox).iter().all(|m| m.id != "3"));
        let err = store.delete_message("3").unwrap_err();
        assert_eq!(err, Error::MessageNotFound("3".into()));
    }

    #[test]
    fn test_failed_delete_leaves_collections_unchanged() {
        let mut store = store();
        let before = store.list_folder(Folder::Inbox).len();
        assert!(store.delete_message("missing").is_err());
        assert_eq!(store.list_folder(Folder::Inbox).len(), before);
    }

    #[test]
    fn test_send_prepends_to_sent() {
        let mut store = store();
        let draft = Draft {
            to: vec![User::new("2", "Justin Lapointe", "justin.l@example.com")],
            subject: "Quick question".into(),
            body: "Do you have a minute today?".into(),
            ..Draft::default()
        };

        let sent = store.send_message(draft);
        let folder = store.list_folder(Folder::Sent);
        assert_eq!(folder[0].id, sent.id);
        assert!(sent.read);
        assert!(!sent.starred);
        assert_eq!(sent.from, *store.session_user());
    }

    #[test]
    fn test_sent_ids_are_unique() {
        let mut store = store();
        let first = store.send_message(Draft::default());
        let second = store.send_message(Draft::default());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_counts() {
        let store = store();
        assert_eq!(store.unread_count(), 4);
        assert_eq!(store.starred_count(), 1);
        assert_eq!(store.important_count(), 0);
    }

    #[test]
    fn test_resolve_labels_skips_unknown_ids() {
        let store = store();
        let mut message = store.message("1").unwrap().clone();
        message.labels.push("no-such-label".into());

        let resolved = store.resolve_labels(&message);
        let names: Vec<&str> = resolved.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Projects"]);
    }
}
