//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired `AppDeps`; `runtime.usecases()` hands out
//! services and page controllers with their ports already attached.
//!
//! ```ignore
//! let runtime = AppRuntime::new(deps);
//! let page = runtime.usecases().list_page(ComponentScope::new());
//! page.mount().await;
//! ```
//!
//! ## Adding New Use Cases
//!
//! 1. Give the controller a `new()` taking the ports it needs
//! 2. Add a method to `UseCases` that calls it with the runtime's deps

use std::sync::Arc;

use blog_app::{
    AddBlogPage, AppDeps, BlogFormController, BlogListPage, BlogService, ComponentScope,
    EditBlogPage, ImageUploadController,
};

/// Application runtime with dependencies.
///
/// The record service is built once so every page shares it.
/// 记录服务只构建一次，所有页面共享。
pub struct AppRuntime {
    pub deps: AppDeps,
    blog_service: Arc<BlogService>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        let blog_service = Arc::new(BlogService::from_ports(deps.document_store.clone()));
        Self { deps, blog_service }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn blog_service(&self) -> Arc<BlogService> {
        self.runtime.blog_service.clone()
    }

    pub fn list_page(&self, scope: ComponentScope) -> BlogListPage {
        BlogListPage::new(
            self.blog_service(),
            self.runtime.deps.navigator.clone(),
            self.runtime.deps.ui.clone(),
            scope,
        )
    }

    pub fn add_page(&self, scope: ComponentScope) -> AddBlogPage {
        AddBlogPage::new(
            self.blog_service(),
            self.runtime.deps.navigator.clone(),
            scope,
        )
    }

    /// Reads the record id from the navigator's current route on mount.
    pub fn edit_page(&self, scope: ComponentScope) -> EditBlogPage {
        EditBlogPage::new(
            self.blog_service(),
            self.runtime.deps.navigator.clone(),
            scope,
        )
    }

    /// Image picker bound to `form`, using the configured upload limits.
    pub fn image_upload(&self, form: &BlogFormController) -> ImageUploadController {
        form.image_upload(
            self.runtime.deps.file_encoder.clone(),
            self.runtime.deps.ui.clone(),
            self.runtime.deps.upload_limits,
        )
    }
}
