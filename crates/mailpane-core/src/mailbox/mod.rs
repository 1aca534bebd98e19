//! Folder views and the mailbox store.

mod folder;
mod store;

pub use folder::Folder;
pub use store::MailboxStore;
