//! Drives the mailbox store through a typical session over the sample
//! dataset: browse folders, read a message, star it, reply, and send.
//!
//! Run with: `cargo run --example walkthrough`

use mailpane_core::{Folder, MailboxSession, sample};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut session = MailboxSession::new(sample::store());

    println!("Signed in as {}", session.store().session_user().display());
    for folder in Folder::ALL {
        let count = session.store().list_folder(folder).len();
        println!("  {:<10} {count} messages", folder.title());
    }

    // Open the first unread message in the inbox.
    let first_unread = session
        .visible_messages()
        .iter()
        .find(|m| !m.read)
        .map(|m| m.id.clone());
    if let Some(id) = first_unread {
        let Ok(message) = session.open_message(&id) else {
            return;
        };
        println!("\nReading: {} — {}", message.from.name, message.subject);
        println!("  {}", message.preview());
        for attachment in &message.attachments {
            println!("  attachment: {} ({})", attachment.name, attachment.display_size());
        }

        // Star it, then reply.
        let _ = session.toggle_star(&id);
        let _ = session.open_reply(&id);
        if let Some(draft) = session.draft_mut() {
            draft.body = format!("Thanks, will take a look.{}", draft.body);
        }
        if let Some(sent) = session.send() {
            println!("\nSent: {}", sent.subject);
        }
    }

    session.change_folder(Folder::Sent);
    println!("\nSent folder now holds {} messages:", session.visible_messages().len());
    for message in session.visible_messages() {
        println!("  {} — {}", message.date.format("%d %b %Y %H:%M"), message.subject);
    }

    if let Some(draft) = session.draft() {
        println!("draft still open: {draft:?}");
    }

    // Dump the remaining unread count as the header badge would show it.
    println!("\nUnread: {}", session.store().unread_count());

    // The host can snapshot the view model as JSON.
    if let Some(starred) = session.store().list_folder(Folder::Starred).first() {
        match serde_json::to_string_pretty(starred) {
            Ok(json) => println!("\nStarred snapshot:\n{json}"),
            Err(err) => eprintln!("snapshot failed: {err}"),
        }
    }
}
