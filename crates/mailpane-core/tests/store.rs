//! Integration tests for the mailbox store's observable behavior.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use mailpane_core::{Draft, Error, Folder, MailboxStore, Message, User, format_bytes, sample};

/// A received message with explicit flags, for view-membership tests.
fn flagged_message(id: &str, starred: bool, important: bool) -> Message {
    Message {
        id: id.into(),
        from: User::new("9", "Sender", "sender@example.com"),
        to: vec![sample::current_user()],
        cc: vec![],
        bcc: vec![],
        subject: format!("Message {id}"),
        body: "body".into(),
        attachments: vec![],
        date: Utc
            .with_ymd_and_hms(2023, 5, 15, 12, 0, 0)
            .single()
            .unwrap_or_default(),
        read: false,
        starred,
        important: important.then_some(true),
        labels: vec![],
        replied: None,
        forwarded: None,
        group_id: None,
    }
}

fn store_with(received: Vec<Message>) -> MailboxStore {
    MailboxStore::new(sample::current_user(), received, sample::labels(), sample::groups())
}

#[test]
fn starred_view_contains_exactly_the_starred_messages() {
    let store = store_with(vec![
        flagged_message("a", true, false),
        flagged_message("b", false, false),
        flagged_message("c", true, true),
    ]);

    let starred: Vec<&str> = store
        .list_folder(Folder::Starred)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(starred, ["a", "c"]);

    let important: Vec<&str> = store
        .list_folder(Folder::Important)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(important, ["c"]);
}

#[test]
fn send_then_list_sent_returns_new_message_first() {
    let mut store = sample::store();
    let mut draft = Draft::new();
    draft.to = vec![sample::users()[1].clone()];
    draft.subject = "Fresh".into();
    draft.body = "Hot off the press.".into();

    let sent = store.send_message(draft);
    let listed = store.list_folder(Folder::Sent);
    assert_eq!(listed[0].id, sent.id);
    // Previously sent messages keep their positions behind it.
    assert_eq!(listed[1].id, "s1");
}

#[test]
fn delete_is_permanent_and_repeat_delete_fails() {
    let mut store = sample::store();
    store.delete_message("2").unwrap();

    assert!(store.list_folder(Folder::Inbox).iter().all(|m| m.id != "2"));
    // The starred view loses it too; folders are views, not storage.
    assert!(store.list_folder(Folder::Starred).is_empty());
    assert_eq!(
        store.delete_message("2"),
        Err(Error::MessageNotFound("2".into()))
    );
}

#[test]
fn reply_draft_targets_sender_and_prefixes_subject() {
    let store = sample::store();
    let original = store.message("1").unwrap();

    let draft = Draft::reply(original);
    assert_eq!(draft.to, vec![original.from.clone()]);
    assert_eq!(draft.subject, "Re: Client Dashboard");
}

#[test]
fn forward_draft_shares_attachments_and_leaves_recipients_empty() {
    let mut original = flagged_message("x", false, false);
    original.attachments = sample::store().message("2").unwrap().attachments.clone();
    original.attachments.push(
        sample::store().message("5").unwrap().attachments[0].clone(),
    );
    assert_eq!(original.attachments.len(), 2);

    let draft = Draft::forward(&original);
    assert!(draft.to.is_empty());
    assert_eq!(draft.attachments.len(), 2);
    for (ours, theirs) in draft.attachments.iter().zip(&original.attachments) {
        assert_eq!(ours.id, theirs.id);
    }
}

#[test]
fn byte_formatting_fixed_points() {
    assert_eq!(format_bytes(0), "0 Bytes");
    assert_eq!(format_bytes(1024), "1 KB");
    assert_eq!(format_bytes(2_500_000), "2.38 MB");
}

proptest! {
    #[test]
    fn toggle_star_twice_restores_the_message(starred in any::<bool>()) {
        let mut store = store_with(vec![flagged_message("p", starred, false)]);
        let before = store.message("p").cloned();
        store.toggle_star("p").unwrap();
        store.toggle_star("p").unwrap();
        prop_assert_eq!(store.message("p").cloned(), before);
    }

    #[test]
    fn mark_read_is_idempotent(read in any::<bool>()) {
        let mut message = flagged_message("q", false, false);
        message.read = read;
        let mut store = store_with(vec![message]);

        let once = store.mark_read("q").unwrap();
        let twice = store.mark_read("q").unwrap();
        prop_assert!(once.read);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn formatted_bytes_always_carry_a_unit(bytes in any::<u64>()) {
        let formatted = format_bytes(bytes);
        prop_assert!(
            ["Bytes", "KB", "MB", "GB", "TB"]
                .iter()
                .any(|unit| formatted.ends_with(unit))
        );
    }
}
