//! Blog record model and the schemaless document shape it is stored as.

mod document;
pub mod fields;
mod filter;
mod model;
mod value;

pub use document::{Document, DocumentFields};
pub use filter::{SearchFilter, SearchKey};
pub use model::{Blog, BlogDraft};
pub use value::FieldValue;
