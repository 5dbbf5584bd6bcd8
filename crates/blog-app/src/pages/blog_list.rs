use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use blog_core::ports::{NavigatorPort, UiPort};
use blog_core::view::{Boundary, BoundaryFallbacks};
use tracing::{debug, error};

use crate::controllers::BlogTableController;
use crate::scope::ComponentScope;
use crate::usecases::BlogService;

#[derive(Default)]
struct ListPageInner {
    loading: bool,
    error: Option<String>,
    table: Option<Arc<BlogTableController>>,
}

/// `/manage/blogs`: fetches the records once and hands them to the table.
pub struct BlogListPage {
    inner: Mutex<ListPageInner>,
    mounted: AtomicBool,
    service: Arc<BlogService>,
    navigator: Arc<dyn NavigatorPort>,
    ui: Arc<dyn UiPort>,
    scope: ComponentScope,
}

impl BlogListPage {
    pub fn new(
        service: Arc<BlogService>,
        navigator: Arc<dyn NavigatorPort>,
        ui: Arc<dyn UiPort>,
        scope: ComponentScope,
    ) -> Self {
        Self {
            inner: Mutex::new(ListPageInner {
                loading: true,
                ..ListPageInner::default()
            }),
            mounted: AtomicBool::new(false),
            service,
            navigator,
            ui,
            scope,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListPageInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Triggers the list operation. Only the first call does anything.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("list page already mounted");
            return;
        }

        let result = self.service.list_blogs().await;

        if !self.scope.is_live() {
            debug!("list page unmounted before load finished");
            return;
        }

        let mut inner = self.lock();
        inner.loading = false;
        match result {
            Ok(blogs) => {
                inner.table = Some(Arc::new(BlogTableController::new(
                    blogs,
                    self.service.clone(),
                    self.navigator.clone(),
                    self.ui.clone(),
                    self.scope.child(),
                )));
            }
            Err(e) => {
                error!(error = %e, "failed to load blogs");
                inner.error = Some(e.to_string());
            }
        }
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    /// `"Loading..."`, then `"Something went wrong."` or the table.
    pub fn view(&self) -> Boundary<Arc<BlogTableController>> {
        let inner = self.lock();
        match &inner.table {
            Some(table) => Boundary::resolve(
                inner.loading,
                inner.error.as_deref(),
                table.clone(),
                &BoundaryFallbacks::DEFAULT,
            ),
            None if inner.loading => Boundary::Loading(BoundaryFallbacks::DEFAULT.loading.to_string()),
            None => Boundary::Failed(
                BoundaryFallbacks::DEFAULT
                    .error
                    .render(inner.error.as_deref().unwrap_or_default()),
            ),
        }
    }
}
