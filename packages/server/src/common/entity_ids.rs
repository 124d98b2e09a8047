//! Typed ID definitions for domain entities.

pub use super::id::Id;

/// Marker type for Contact entities.
pub struct Contact;

/// Primary key of a stored contact.
pub type ContactId = Id<Contact>;
