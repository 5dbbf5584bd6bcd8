use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use blog_core::ports::{NavigatorPort, StoreError};
use blog_core::routes::ID_PARAM;
use blog_core::view::messages::BLOG_NOT_FOUND;
use blog_core::view::{Boundary, BoundaryFallbacks};
use blog_core::BlogId;
use thiserror::Error;
use tracing::{debug, warn};

use crate::controllers::BlogFormController;
use crate::scope::ComponentScope;
use crate::usecases::BlogService;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditPageError {
    #[error("missing blog id in route")]
    MissingId,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What the edit page shows once loaded.
#[derive(Clone)]
pub enum EditPageContent {
    NotFound,
    Form(Arc<BlogFormController>),
}

impl EditPageContent {
    pub fn form(&self) -> Option<Arc<BlogFormController>> {
        match self {
            EditPageContent::Form(form) => Some(form.clone()),
            EditPageContent::NotFound => None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            EditPageContent::NotFound => Some(BLOG_NOT_FOUND),
            EditPageContent::Form(_) => None,
        }
    }
}

struct EditPageInner {
    loading: bool,
    error: Option<EditPageError>,
    content: EditPageContent,
}

/// `/manage/blogs/:id/edit`: loads the record named by the route and
/// seeds an edit-mode form with it.
pub struct EditBlogPage {
    inner: Mutex<EditPageInner>,
    mounted: AtomicBool,
    service: Arc<BlogService>,
    navigator: Arc<dyn NavigatorPort>,
    scope: ComponentScope,
}

impl EditBlogPage {
    pub fn new(
        service: Arc<BlogService>,
        navigator: Arc<dyn NavigatorPort>,
        scope: ComponentScope,
    ) -> Self {
        Self {
            inner: Mutex::new(EditPageInner {
                loading: true,
                error: None,
                content: EditPageContent::NotFound,
            }),
            mounted: AtomicBool::new(false),
            service,
            navigator,
            scope,
        }
    }

    fn lock(&self) -> MutexGuard<'_, EditPageInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return;
        }

        let result = match self.navigator.path_param(ID_PARAM) {
            Some(id) if !id.is_empty() => self
                .service
                .get_blog(&BlogId::from(id))
                .await
                .map_err(EditPageError::from),
            _ => Err(EditPageError::MissingId),
        };

        if !self.scope.is_live() {
            debug!("edit page unmounted before load finished");
            return;
        }

        let mut inner = self.lock();
        inner.loading = false;
        match result {
            Ok(Some(blog)) => {
                inner.content = EditPageContent::Form(Arc::new(BlogFormController::new_edit(
                    &blog,
                    self.service.clone(),
                    self.navigator.clone(),
                    self.scope.child(),
                )));
            }
            Ok(None) => inner.content = EditPageContent::NotFound,
            Err(e) => {
                warn!(error = %e, "failed to load blog");
                inner.error = Some(e);
            }
        }
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    /// `"Loading blog..."`, `"Error loading blog: <message>"`, then either
    /// `"Blog not found"` or the form.
    pub fn view(&self) -> Boundary<EditPageContent> {
        let inner = self.lock();
        let error = inner.error.as_ref().map(ToString::to_string);
        Boundary::resolve(
            inner.loading,
            error.as_deref(),
            inner.content.clone(),
            &BoundaryFallbacks::EDIT_PAGE,
        )
    }
}
