//! Blog commands
//! 博客相关命令
//!
//! Each command mounts the page a browser user would visit, drives its
//! controllers and unmounts it again.

use std::path::{Path, PathBuf};

use anyhow::Context;
use blog_app::{BlogFormController, ComponentScope, DeleteOutcome, EditPageContent, UploadOutcome};
use blog_core::form::{FormField, FormState};
use blog_core::routes::{edit_blog_path, ADD_BLOG_PATH, BLOGS_PATH};
use blog_core::upload::{MimeType, UploadCandidate};
use blog_core::view::messages::{
    BLOG_NOT_FOUND, ERROR_LOADING_BLOG_PREFIX, ERROR_PREFIX, SOMETHING_WENT_WRONG,
};
use blog_core::view::Boundary;
use blog_core::BlogId;
use tracing::{info, info_span, Instrument};

use super::dto::{BlogDetailDto, BlogTableDto, DeleteStatus, SavedBlogDto};
use super::error::map_err;
use crate::bootstrap::AppRuntime;

/// Field values entered on the command line. `None` leaves a field as the
/// form seeded it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogInput {
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// Image file to embed as a data URL.
    pub image: Option<PathBuf>,
    /// Clear the image field. Applied before `image`.
    pub remove_image: bool,
}

impl BlogInput {
    fn text_fields(&self) -> [(FormField, Option<&String>); 4] {
        [
            (FormField::Name, self.name.as_ref()),
            (FormField::Title, self.title.as_ref()),
            (FormField::Content, self.content.as_ref()),
            (FormField::Author, self.author.as_ref()),
        ]
    }
}

/// Builds an on-disk upload candidate; the type comes from the extension
/// and the size from the file metadata. The bytes are read by the encoder.
pub async fn image_candidate(path: &Path) -> anyhow::Result<UploadCandidate> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(MimeType::from_extension)
        .unwrap_or_else(|| MimeType::new(""));
    Ok(UploadCandidate::from_path(path, mime, metadata.len()))
}

/// List the blogs, optionally filtered by name.
/// 列出博客，可按名称过滤。
pub async fn list_blogs(runtime: &AppRuntime, filter: Option<&str>) -> Result<BlogTableDto, String> {
    let span = info_span!("command.blogs.list", filter = ?filter);
    async move {
        runtime.deps.navigator.navigate(BLOGS_PATH);
        let page = runtime.usecases().list_page(ComponentScope::new());
        page.mount().await;

        let result = match page.view() {
            Boundary::Ready(table) => {
                if let Some(filter) = filter {
                    table.set_filter(filter);
                }
                Ok(BlogTableDto::from_table(&table))
            }
            other => Err(other
                .fallback_text()
                .unwrap_or(SOMETHING_WENT_WRONG)
                .to_string()),
        };

        page.unmount();
        result
    }
    .instrument(span)
    .await
}

/// Every stored field of one blog.
/// 获取单个博客的全部字段。
pub async fn show_blog(runtime: &AppRuntime, id: &str) -> Result<BlogDetailDto, String> {
    let span = info_span!("command.blogs.show", blog_id = %id);
    async move {
        let service = runtime.usecases().blog_service();
        match service.get_blog(&BlogId::from(id)).await {
            Ok(Some(blog)) => Ok(BlogDetailDto::from(blog)),
            Ok(None) => Err(BLOG_NOT_FOUND.to_string()),
            Err(e) => Err(format!("{ERROR_LOADING_BLOG_PREFIX}{e}")),
        }
    }
    .instrument(span)
    .await
}

/// Fill the add form and submit it.
/// 填写新增表单并提交。
pub async fn add_blog(runtime: &AppRuntime, input: BlogInput) -> Result<SavedBlogDto, String> {
    let span = info_span!("command.blogs.add");
    async move {
        runtime.deps.navigator.navigate(ADD_BLOG_PATH);
        let page = runtime.usecases().add_page(ComponentScope::new());
        let result = fill_and_submit(runtime, &page.form(), &input).await;
        page.unmount();
        result
    }
    .instrument(span)
    .await
}

/// Load the edit form of `id`, apply the given fields and submit it.
/// 加载编辑表单，应用字段并提交。
pub async fn edit_blog(
    runtime: &AppRuntime,
    id: &str,
    input: BlogInput,
) -> Result<SavedBlogDto, String> {
    let span = info_span!("command.blogs.edit", blog_id = %id);
    async move {
        runtime
            .deps
            .navigator
            .navigate(&edit_blog_path(&BlogId::from(id)));
        let page = runtime.usecases().edit_page(ComponentScope::new());
        page.mount().await;

        let result = match page.view() {
            Boundary::Ready(EditPageContent::Form(form)) => {
                fill_and_submit(runtime, &form, &input).await
            }
            Boundary::Ready(EditPageContent::NotFound) => Err(BLOG_NOT_FOUND.to_string()),
            other => Err(other
                .fallback_text()
                .unwrap_or(SOMETHING_WENT_WRONG)
                .to_string()),
        };

        page.unmount();
        result
    }
    .instrument(span)
    .await
}

/// Delete a blog from the list page, asking for confirmation first.
/// 从列表页删除博客，先请求确认。
pub async fn delete_blog(runtime: &AppRuntime, id: &str) -> Result<DeleteStatus, String> {
    let span = info_span!("command.blogs.delete", blog_id = %id);
    async move {
        runtime.deps.navigator.navigate(BLOGS_PATH);
        let page = runtime.usecases().list_page(ComponentScope::new());
        page.mount().await;

        let result = match page.view() {
            Boundary::Ready(table) => match table.delete_row(&BlogId::from(id)).await {
                DeleteOutcome::Deleted => Ok(DeleteStatus::Deleted),
                DeleteOutcome::Declined => Ok(DeleteStatus::Declined),
                DeleteOutcome::Failed(e) => Err(format!("{ERROR_PREFIX}{e}")),
            },
            other => Err(other
                .fallback_text()
                .unwrap_or(SOMETHING_WENT_WRONG)
                .to_string()),
        };

        page.unmount();
        result
    }
    .instrument(span)
    .await
}

async fn fill_and_submit(
    runtime: &AppRuntime,
    form: &BlogFormController,
    input: &BlogInput,
) -> Result<SavedBlogDto, String> {
    for (field, value) in input.text_fields() {
        if let Some(value) = value {
            form.set_field(field, value.clone());
        }
    }

    if input.remove_image || input.image.is_some() {
        let upload = runtime.usecases().image_upload(form);
        if input.remove_image {
            upload.remove();
        }
        if let Some(path) = &input.image {
            let candidate = image_candidate(path).await.map_err(map_err)?;
            match upload.pick(vec![candidate]).await {
                UploadOutcome::Accepted => {}
                // The user was already alerted with the reason.
                outcome => {
                    info!(?outcome, path = %path.display(), "image not attached");
                    return Err(format!("Image not attached: {}", path.display()));
                }
            }
        }
    }

    match form.submit().await {
        FormState::Succeeded => Ok(SavedBlogDto {
            id: form.saved_id().map(|id| id.to_string()),
            location: runtime.deps.navigator.current_path(),
        }),
        state => Err(format!(
            "{ERROR_PREFIX}{}",
            state.last_error().unwrap_or("submission did not complete")
        )),
    }
}
