//! Blog admin application layer
//!
//! Record service, component liveness scope, and the controllers behind
//! the list, add and edit pages.

pub mod app_paths;
pub mod controllers;
pub mod deps;
pub mod pages;
pub mod scope;
pub mod usecases;

pub use controllers::{
    BlogFormController, BlogRow, BlogTableController, DeleteOutcome, ImageUploadController,
    UploadOutcome,
};
pub use deps::AppDeps;
pub use pages::{AddBlogPage, BlogListPage, EditBlogPage, EditPageContent};
pub use scope::ComponentScope;
pub use usecases::BlogService;
