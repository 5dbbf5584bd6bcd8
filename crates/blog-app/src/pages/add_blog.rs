use std::sync::Arc;

use blog_core::ports::NavigatorPort;

use crate::controllers::BlogFormController;
use crate::scope::ComponentScope;
use crate::usecases::BlogService;

/// `/manage/blogs/add`: a form in add mode.
pub struct AddBlogPage {
    form: Arc<BlogFormController>,
    scope: ComponentScope,
}

impl AddBlogPage {
    pub fn new(
        service: Arc<BlogService>,
        navigator: Arc<dyn NavigatorPort>,
        scope: ComponentScope,
    ) -> Self {
        let form = BlogFormController::new_add(service, navigator, scope.child());
        Self {
            form: Arc::new(form),
            scope,
        }
    }

    pub fn form(&self) -> Arc<BlogFormController> {
        self.form.clone()
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}
