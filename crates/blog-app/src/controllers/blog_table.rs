//! Blog list table: local rows, name filter, row actions.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use blog_core::ports::{NavigatorPort, StoreError, UiPort};
use blog_core::routes::edit_blog_path;
use blog_core::view::messages::{CONFIRM_DELETE, NO_POSTS_FOUND};
use blog_core::view::{Boundary, BoundaryFallbacks};
use blog_core::{Blog, BlogId, SearchFilter};
use tracing::{debug, info, warn};

use crate::scope::ComponentScope;
use crate::usecases::BlogService;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogRow {
    pub id: String,
    pub name: String,
    /// `YYYY-MM-DD` in the local time zone, empty when unknown.
    pub created_at: String,
}

impl BlogRow {
    pub const HEADERS: [&'static str; 3] = ["ID", "Name", "Created At"];

    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            name: blog.display_name().to_string(),
            created_at: blog
                .created_date()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; the store was not called.
    Declined,
    Deleted,
    Failed(StoreError),
}

#[derive(Debug, Default)]
struct TableInner {
    rows: Vec<Blog>,
    filter: String,
    deleting: usize,
    last_error: Option<String>,
}

/// Owns an independent copy of the rows handed over by the list page.
pub struct BlogTableController {
    inner: Mutex<TableInner>,
    search: SearchFilter,
    service: Arc<BlogService>,
    navigator: Arc<dyn NavigatorPort>,
    ui: Arc<dyn UiPort>,
    scope: ComponentScope,
}

impl BlogTableController {
    pub fn new(
        rows: Vec<Blog>,
        service: Arc<BlogService>,
        navigator: Arc<dyn NavigatorPort>,
        ui: Arc<dyn UiPort>,
        scope: ComponentScope,
    ) -> Self {
        Self {
            inner: Mutex::new(TableInner {
                rows,
                ..TableInner::default()
            }),
            search: SearchFilter::by_name(),
            service,
            navigator,
            ui,
            scope,
        }
    }

    /// Searches with `search` instead of the name-only filter.
    pub fn with_search(mut self, search: SearchFilter) -> Self {
        self.search = search;
        self
    }

    fn lock(&self) -> MutexGuard<'_, TableInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All local rows, unfiltered.
    pub fn rows(&self) -> Vec<Blog> {
        self.lock().rows.clone()
    }

    pub fn filter(&self) -> String {
        self.lock().filter.clone()
    }

    pub fn set_filter(&self, text: impl Into<String>) {
        self.lock().filter = text.into();
    }

    /// Rows matching the filter, in original order. Never calls the store.
    pub fn visible_rows(&self) -> Vec<Blog> {
        let inner = self.lock();
        self.search
            .apply(&inner.rows, &inner.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn render_rows(&self) -> Vec<BlogRow> {
        self.visible_rows().iter().map(BlogRow::from_blog).collect()
    }

    /// `"No posts found."` when nothing is visible.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.visible_rows().is_empty() {
            Some(NO_POSTS_FOUND)
        } else {
            None
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.lock().deleting > 0
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    /// Table content behind the delete boundary: `"Deleting post..."`
    /// while a delete is in flight, `"Error: <message>"` after a failure.
    pub fn view(&self) -> Boundary<Vec<BlogRow>> {
        let (deleting, error) = {
            let inner = self.lock();
            (inner.deleting > 0, inner.last_error.clone())
        };
        Boundary::resolve(
            deleting,
            error.as_deref(),
            self.render_rows(),
            &BoundaryFallbacks::TABLE_DELETE,
        )
    }

    /// Opens the edit page of the row.
    pub fn activate_row(&self, id: &BlogId) {
        let path = edit_blog_path(id);
        debug!(path = %path, "row activated");
        self.navigator.navigate(&path);
    }

    /// Asks for confirmation, then deletes. On success exactly that row is
    /// removed locally; on failure the rows are unchanged.
    pub async fn delete_row(&self, id: &BlogId) -> DeleteOutcome {
        if !self.ui.confirm(CONFIRM_DELETE) {
            info!(blog_id = %id, "delete declined");
            return DeleteOutcome::Declined;
        }

        {
            let mut inner = self.lock();
            inner.deleting += 1;
            inner.last_error = None;
        }

        let result = self.service.delete_blog(id).await;

        if !self.scope.is_live() {
            debug!(blog_id = %id, "delete settled after unmount, discarding");
            return match result {
                Ok(()) => DeleteOutcome::Deleted,
                Err(e) => DeleteOutcome::Failed(e),
            };
        }

        let mut inner = self.lock();
        inner.deleting = inner.deleting.saturating_sub(1);
        match result {
            Ok(()) => {
                inner.rows.retain(|blog| &blog.id != id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(blog_id = %id, error = %e, "delete failed");
                inner.last_error = Some(e.to_string());
                DeleteOutcome::Failed(e)
            }
        }
    }
}
