//! # blog-core
//!
//! Core domain models and port definitions for the blog admin.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod blog;
pub mod config;
pub mod form;
pub mod ids;
pub mod ports;
pub mod routes;
pub mod upload;
pub mod view;

// Re-export commonly used types at the crate root
pub use blog::{Blog, BlogDraft, Document, DocumentFields, FieldValue, SearchFilter, SearchKey};
pub use config::AppConfig;
pub use form::{BlogFormValues, FormAction, FormEvent, FormField, FormMode, FormState, FormStateMachine};
pub use ids::BlogId;
pub use routes::Route;
pub use upload::{DataUrl, MimeType, UploadCandidate, UploadError, UploadLimits, UploadSource};
pub use view::{Boundary, BoundaryFallbacks};
