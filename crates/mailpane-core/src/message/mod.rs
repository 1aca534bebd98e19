//! Message, user, label, and group data models.

mod directory;
mod model;

pub use directory::{EmailGroup, Label};
pub use model::{Attachment, Message, User};
