//! Sample dataset for demos and tests.
//!
//! The presentational layer runs over this in-memory data in lieu of a
//! real backend: a session user, a small user directory, label and group
//! reference sets, and pre-populated received/sent collections.

use chrono::{DateTime, TimeZone, Utc};

use crate::mailbox::MailboxStore;
use crate::message::{Attachment, EmailGroup, Label, Message, User};

const AVATAR_URL: &str = "https://img.freepik.com/free-vector/user-blue-gradient_78370-4692.jpg";

fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn user(id: &str, name: &str, email: &str) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        avatar: Some(AVATAR_URL.into()),
    }
}

#[allow(clippy::too_many_arguments)]
fn received_message(
    id: &str,
    from: User,
    to: User,
    subject: &str,
    body: &str,
    date: DateTime<Utc>,
    read: bool,
    starred: bool,
    label: &str,
    attachments: Vec<Attachment>,
) -> Message {
    Message {
        id: id.into(),
        from,
        to: vec![to],
        cc: vec![],
        bcc: vec![],
        subject: subject.into(),
        body: body.into(),
        attachments,
        date,
        read,
        starred,
        important: None,
        labels: vec![label.into()],
        replied: None,
        forwarded: None,
        group_id: None,
    }
}

fn attachment(id: &str, name: &str, size: u64, mime_type: &str) -> Attachment {
    Attachment {
        id: id.into(),
        name: name.into(),
        size,
        mime_type: mime_type.into(),
        url: "#".into(),
    }
}

/// The user the session composes as.
#[must_use]
pub fn current_user() -> User {
    user("1", "James Hong", "jrh343@example.com")
}

/// The user directory, current user first.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        current_user(),
        user("2", "Justin Lapointe", "justin.l@example.com"),
        user("3", "Rufana", "rufana@example.com"),
        user("4", "Cameron Drake", "cameron.d@example.com"),
        user("5", "Sean Hill", "sean.hill@example.com"),
    ]
}

/// The label reference set.
#[must_use]
pub fn labels() -> Vec<Label> {
    vec![
        Label::new("team-events", "Team Events", "#10b981"),
        Label::new("work", "Work", "#f59e0b"),
        Label::new("external", "External", "#ef4444"),
        Label::new("projects", "Projects", "#3b82f6"),
        Label::new("applications", "Applications", "#8b5cf6"),
    ]
}

/// The group reference set.
#[must_use]
pub fn groups() -> Vec<EmailGroup> {
    let users = users();
    vec![
        EmailGroup {
            id: "marketing".into(),
            name: "Marketing Team".into(),
            description: Some("Group for marketing discussions".into()),
            members: vec![users[0].clone(), users[1].clone(), users[2].clone()],
        },
        EmailGroup {
            id: "development".into(),
            name: "Dev Team".into(),
            description: Some("Development team communications".into()),
            members: vec![users[0].clone(), users[3].clone(), users[4].clone()],
        },
        EmailGroup {
            id: "leadership".into(),
            name: "Leadership".into(),
            description: Some("Executive communications".into()),
            members: vec![users[0].clone(), users[2].clone(), users[4].clone()],
        },
    ]
}

/// The pre-populated received collection.
#[must_use]
pub fn received() -> Vec<Message> {
    let users = users();
    let me = current_user();
    vec![
        received_message(
            "1",
            users[1].clone(),
            me.clone(),
            "Client Dashboard",
            "It seems that recipients are receiving notification emails for every update to the \
             client dashboard. We should probably adjust the notification settings to only send \
             emails for major updates.",
            date(2023, 5, 15, 15, 13),
            false,
            false,
            "projects",
            vec![],
        ),
        received_message(
            "2",
            users[2].clone(),
            me.clone(),
            "UI project",
            "Regardless, you can usually expect an increase in engagement when we update the UI \
             to be more intuitive. The mockups look great, and I think we should proceed with \
             the implementation.",
            date(2023, 5, 15, 15, 13),
            false,
            true,
            "applications",
            vec![attachment("a1", "UI_Mockups.pdf", 2_500_000, "application/pdf")],
        ),
        received_message(
            "3",
            users[3].clone(),
            me.clone(),
            "You're missing",
            "Here are a few catchy email subject line examples that might help improve our email \
             open rates. I've attached a PDF with more extensive examples and statistics.",
            date(2023, 5, 15, 15, 13),
            false,
            false,
            "external",
            vec![attachment(
                "a2",
                "Email_Subject_Examples.pdf",
                1_200_000,
                "application/pdf",
            )],
        ),
        received_message(
            "4",
            users[4].clone(),
            me.clone(),
            "How Have You Progressed",
            "You can write effective retargeting subject lines by personalizing them based on \
             customer behavior. For example, \"James, take another look at your cart\" is more \
             effective than generic subject lines.",
            date(2023, 5, 15, 15, 13),
            false,
            false,
            "team-events",
            vec![],
        ),
        received_message(
            "5",
            users[2].clone(),
            me,
            "Weekly progress update",
            "Here is the weekly progress update for the ongoing projects. All teams are on track \
             to meet their deadlines.",
            date(2023, 5, 14, 10, 30),
            true,
            false,
            "work",
            vec![attachment(
                "a3",
                "Weekly_Report.xlsx",
                550_000,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            )],
        ),
    ]
}

/// The pre-populated sent collection, most recent first.
#[must_use]
pub fn sent() -> Vec<Message> {
    let users = users();
    let me = current_user();
    vec![
        Message {
            id: "s1".into(),
            from: me.clone(),
            to: vec![users[1].clone()],
            cc: vec![],
            bcc: vec![],
            subject: "Re: Client Dashboard".into(),
            body: "Thanks for bringing this to my attention. I'll look into adjusting the \
                   notification settings right away. I think we should only send emails for \
                   major updates or when specific actions are required."
                .into(),
            attachments: vec![],
            date: date(2023, 5, 15, 15, 45),
            read: true,
            starred: false,
            important: None,
            labels: vec!["projects".into()],
            replied: Some(true),
            forwarded: None,
            group_id: None,
        },
        Message {
            id: "s2".into(),
            from: me,
            to: vec![users[2].clone(), users[3].clone()],
            cc: vec![users[4].clone()],
            bcc: vec![],
            subject: "Monthly team meeting".into(),
            body: "Our monthly team meeting is scheduled for next Friday at 2 PM. Please prepare \
                   your updates and let me know if you have specific topics you'd like to \
                   discuss."
                .into(),
            attachments: vec![attachment(
                "a4",
                "Meeting_Agenda.docx",
                350_000,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            )],
            date: date(2023, 5, 14, 9, 15),
            read: true,
            starred: false,
            important: None,
            labels: vec!["team-events".into()],
            replied: None,
            forwarded: None,
            group_id: None,
        },
    ]
}

/// A store populated with the full sample dataset.
#[must_use]
pub fn store() -> MailboxStore {
    MailboxStore::new(current_user(), received(), labels(), groups()).with_sent(sent())
}
