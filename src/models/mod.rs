//! Request parameter objects and response models.
//!
//! Response models ignore fields they do not know about. Optional attributes default to `None`
//! when missing; a missing required attribute fails deserialization.
pub mod attachments;
pub mod common;
pub mod contacts;
pub mod inboxes;
pub mod mail;
pub mod messages;
pub mod projects;
pub mod suppressions;
pub mod templates;

pub use common::{DeletedObject, ObjectId};
