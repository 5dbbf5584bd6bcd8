//! Add/edit blog form controller.
//!
//! Drives `FormStateMachine` and executes the actions it emits.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use blog_core::form::{
    BlogFormValues, FormAction, FormEvent, FormField, FormMode, FormState, FormStateMachine,
};
use blog_core::ports::{FileEncoderPort, NavigatorPort, UiPort};
use blog_core::routes::BLOGS_PATH;
use blog_core::upload::UploadLimits;
use blog_core::{Blog, BlogDraft, BlogId};
use tracing::{debug, info, warn};

use super::image_upload::ImageUploadController;
use crate::scope::ComponentScope;
use crate::usecases::BlogService;

#[derive(Debug, Default)]
struct FormInner {
    values: BlogFormValues,
    state: FormState,
    saved_id: Option<BlogId>,
}

pub struct BlogFormController {
    mode: FormMode,
    inner: Arc<Mutex<FormInner>>,
    service: Arc<BlogService>,
    navigator: Arc<dyn NavigatorPort>,
    scope: ComponentScope,
}

impl BlogFormController {
    /// Empty form that creates a record on submit.
    pub fn new_add(
        service: Arc<BlogService>,
        navigator: Arc<dyn NavigatorPort>,
        scope: ComponentScope,
    ) -> Self {
        Self::new(FormMode::Add, BlogFormValues::default(), service, navigator, scope)
    }

    /// Form seeded from `blog` that updates it on submit. Missing text
    /// fields seed as empty strings.
    pub fn new_edit(
        blog: &Blog,
        service: Arc<BlogService>,
        navigator: Arc<dyn NavigatorPort>,
        scope: ComponentScope,
    ) -> Self {
        Self::new(
            FormMode::Edit {
                id: blog.id.clone(),
            },
            BlogFormValues::from_blog(blog),
            service,
            navigator,
            scope,
        )
    }

    fn new(
        mode: FormMode,
        values: BlogFormValues,
        service: Arc<BlogService>,
        navigator: Arc<dyn NavigatorPort>,
        scope: ComponentScope,
    ) -> Self {
        Self {
            mode,
            inner: Arc::new(Mutex::new(FormInner {
                values,
                ..FormInner::default()
            })),
            service,
            navigator,
            scope,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn heading(&self) -> &'static str {
        self.mode.heading()
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label(self.lock().state.is_submitting())
    }

    pub fn values(&self) -> BlogFormValues {
        self.lock().values.clone()
    }

    pub fn state(&self) -> FormState {
        self.lock().state.clone()
    }

    /// Id of the record written by the last successful submission.
    pub fn saved_id(&self) -> Option<BlogId> {
        self.lock().saved_id.clone()
    }

    /// Advisory only; never blocks `submit`.
    pub fn field_errors(&self) -> BTreeMap<FormField, String> {
        self.lock().values.advisory_errors()
    }

    /// Returns `false` when inputs are disabled (submission in flight).
    pub fn set_field(&self, field: FormField, value: impl Into<String>) -> bool {
        let mut inner = self.lock();
        if !inner.state.accepts_input() {
            debug!(?field, "form input ignored while submitting");
            return false;
        }
        inner.values.set(field, value);
        true
    }

    /// Image picker bound to this form's `image` field. Disabled while a
    /// submission is in flight.
    pub fn image_upload(
        &self,
        encoder: Arc<dyn FileEncoderPort>,
        ui: Arc<dyn UiPort>,
        limits: UploadLimits,
    ) -> ImageUploadController {
        let on_change_inner = Arc::clone(&self.inner);
        let disabled_inner = Arc::clone(&self.inner);
        let value_inner = Arc::clone(&self.inner);
        let current = self.lock().values.image.clone();

        ImageUploadController::new(current, limits, encoder, ui, self.scope.clone())
            .on_change(move |value| {
                let mut inner = on_change_inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                if inner.state.accepts_input() {
                    inner.values.set(FormField::Image, value);
                }
            })
            .disabled_when(move || {
                disabled_inner
                    .lock()
                    .map(|inner| inner.state.is_submitting())
                    .unwrap_or(false)
            })
            .value_from(move || {
                value_inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .values
                    .image
                    .clone()
            })
    }

    /// Saves the current values. A second call while one is in flight is
    /// ignored. Resolves to the settled state.
    pub async fn submit(&self) -> FormState {
        let draft = self.lock().values.to_draft();
        let actions = self.dispatch(FormEvent::Submit);
        self.execute(actions, &draft).await;
        self.state()
    }

    /// Navigates to the list without saving. Ignored while submitting.
    pub fn cancel(&self) {
        for action in self.dispatch(FormEvent::Cancel) {
            match action {
                FormAction::NavigateToList => self.navigate_to_list(),
                other => warn!(?other, "unexpected action on cancel"),
            }
        }
    }

    fn dispatch(&self, event: FormEvent) -> Vec<FormAction> {
        let mut inner = self.lock();
        let from = inner.state.clone();
        let event_name = format!("{:?}", event);
        let (next, actions) = FormStateMachine::transition(&self.mode, from.clone(), event);
        info!(from = ?from, to = ?next, event = %event_name, "form state transition");
        inner.state = next;
        actions
    }

    async fn execute(&self, actions: Vec<FormAction>, draft: &BlogDraft) {
        let mut queue: VecDeque<FormAction> = actions.into();

        while let Some(action) = queue.pop_front() {
            debug!(?action, "form executing action");
            let outcome = match action {
                FormAction::CreateBlog => self.service.create_blog(draft.clone()).await,
                FormAction::UpdateBlog { id } => self
                    .service
                    .update_blog(&id, draft.clone())
                    .await
                    .map(|()| id),
                FormAction::NavigateToList => {
                    self.navigate_to_list();
                    continue;
                }
            };

            if !self.scope.is_live() {
                debug!("form unmounted before submission settled, discarding result");
                return;
            }

            let event = match outcome {
                Ok(id) => {
                    self.lock().saved_id = Some(id);
                    FormEvent::SubmitSucceeded
                }
                Err(e) => {
                    warn!(error = %e, "blog submission failed");
                    FormEvent::SubmitFailed {
                        message: e.to_string(),
                    }
                }
            };
            queue.extend(self.dispatch(event));
        }
    }

    fn navigate_to_list(&self) {
        if self.scope.if_live(|| self.navigator.navigate(BLOGS_PATH)).is_none() {
            debug!("navigation skipped, form unmounted");
        }
    }
}
