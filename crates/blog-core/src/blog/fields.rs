//! Stored field names of a blog document.

pub const NAME: &str = "name";
pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";
pub const AUTHOR: &str = "author";
pub const IMAGE: &str = "image";
/// Server-assigned creation timestamp.
pub const CREATED_AT: &str = "createdAt";

/// Fields lifted into typed members of `Blog`.
pub const KNOWN: [&str; 6] = [NAME, TITLE, CONTENT, AUTHOR, IMAGE, CREATED_AT];
