//! Compose drafts and reply/forward derivation.

mod draft;

pub use draft::Draft;
