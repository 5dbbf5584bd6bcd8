//! Component controllers: component-local state plus the event handlers
//! that drive it. Locks are never held across an await.

mod blog_form;
mod blog_table;
mod image_upload;

pub use blog_form::BlogFormController;
pub use blog_table::{BlogRow, BlogTableController, DeleteOutcome};
pub use image_upload::{ImageUploadController, UploadOutcome};
