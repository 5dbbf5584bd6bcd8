//! Image field upload component: validation, encoding, drag state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use blog_core::ports::{FileEncoderPort, UiPort};
use blog_core::upload::{UploadCandidate, UploadError, UploadLimits};
use blog_core::view::messages::FAILED_TO_READ_FILE;
use tracing::{debug, error};

use crate::scope::ComponentScope;

type ChangeHandler = Box<dyn Fn(String) + Send + Sync>;
type DisabledProbe = Box<dyn Fn() -> bool + Send + Sync>;
type ValueSource = Box<dyn Fn() -> String + Send + Sync>;

/// What a pick or drop did to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The data URL became the field value.
    Accepted,
    /// Validation failed; the user was alerted.
    Rejected(UploadError),
    /// Reading the file failed; the user was alerted.
    ReadFailed,
    /// The value was cleared.
    Cleared,
    /// Nothing happened (disabled, empty drop, or unmounted).
    Ignored,
}

#[derive(Debug, Default)]
struct UploadInner {
    value: String,
    drag_over: bool,
    disabled: bool,
}

pub struct ImageUploadController {
    inner: Mutex<UploadInner>,
    limits: UploadLimits,
    encoder: Arc<dyn FileEncoderPort>,
    ui: Arc<dyn UiPort>,
    scope: ComponentScope,
    on_change: Option<ChangeHandler>,
    disabled_probe: Option<DisabledProbe>,
    value_source: Option<ValueSource>,
}

impl ImageUploadController {
    pub fn new(
        value: impl Into<String>,
        limits: UploadLimits,
        encoder: Arc<dyn FileEncoderPort>,
        ui: Arc<dyn UiPort>,
        scope: ComponentScope,
    ) -> Self {
        Self {
            inner: Mutex::new(UploadInner {
                value: value.into(),
                ..UploadInner::default()
            }),
            limits,
            encoder,
            ui,
            scope,
            on_change: None,
            disabled_probe: None,
            value_source: None,
        }
    }

    /// Called with every new value, including `""` on clear.
    pub fn on_change(mut self, handler: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Extra disabled condition evaluated on every event.
    pub fn disabled_when(mut self, probe: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.disabled_probe = Some(Box::new(probe));
        self
    }

    /// Reads the current value from its owner instead of the copy taken at
    /// construction, so edits made elsewhere show up in the preview.
    pub fn value_from(mut self, source: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.value_source = Some(Box::new(source));
        self
    }

    fn lock(&self) -> MutexGuard<'_, UploadInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn value(&self) -> String {
        match &self.value_source {
            Some(source) => source(),
            None => self.lock().value.clone(),
        }
    }

    pub fn has_preview(&self) -> bool {
        !self.value().is_empty()
    }

    pub fn is_drag_over(&self) -> bool {
        self.lock().drag_over
    }

    pub fn set_disabled(&self, disabled: bool) {
        let mut inner = self.lock();
        inner.disabled = disabled;
        if disabled {
            inner.drag_over = false;
        }
    }

    pub fn is_disabled(&self) -> bool {
        let flag = self.lock().disabled;
        flag || self.disabled_probe.as_ref().is_some_and(|probe| probe())
    }

    pub fn drag_over(&self) {
        if self.is_disabled() {
            return;
        }
        self.lock().drag_over = true;
    }

    pub fn drag_leave(&self) {
        self.lock().drag_over = false;
    }

    /// File picker selection. Only the first file is used; an empty
    /// selection clears the value.
    pub async fn pick(&self, files: Vec<UploadCandidate>) -> UploadOutcome {
        if self.is_disabled() {
            debug!("pick ignored while disabled");
            return UploadOutcome::Ignored;
        }
        match files.into_iter().next() {
            Some(file) => self.process(file).await,
            None => {
                self.set_value(String::new());
                UploadOutcome::Cleared
            }
        }
    }

    /// Dropped files. Only the first file is used; an empty drop does
    /// nothing.
    pub async fn drop_files(&self, files: Vec<UploadCandidate>) -> UploadOutcome {
        self.lock().drag_over = false;
        if self.is_disabled() {
            debug!("drop ignored while disabled");
            return UploadOutcome::Ignored;
        }
        match files.into_iter().next() {
            Some(file) => self.process(file).await,
            None => UploadOutcome::Ignored,
        }
    }

    /// Clears the value, unless disabled.
    pub fn remove(&self) -> UploadOutcome {
        if self.is_disabled() {
            debug!("remove ignored while disabled");
            return UploadOutcome::Ignored;
        }
        self.set_value(String::new());
        UploadOutcome::Cleared
    }

    async fn process(&self, file: UploadCandidate) -> UploadOutcome {
        if let Err(e) = self.limits.validate(&file) {
            debug!(mime = %file.mime, size = file.size_bytes, reason = %e, "upload rejected");
            self.ui.alert(&e.to_string());
            return UploadOutcome::Rejected(e);
        }

        let file_name = file.file_name.clone().unwrap_or_default();
        let result = self.encoder.encode(file).await;

        if !self.scope.is_live() {
            debug!(file_name = %file_name, "upload finished after unmount, discarding");
            return UploadOutcome::Ignored;
        }

        match result {
            Ok(data_url) => {
                self.set_value(data_url.into());
                UploadOutcome::Accepted
            }
            Err(e) => {
                error!(file_name = %file_name, error = %e, "Error processing file");
                self.ui.alert(FAILED_TO_READ_FILE);
                UploadOutcome::ReadFailed
            }
        }
    }

    fn set_value(&self, value: String) {
        self.lock().value = value.clone();
        if let Some(handler) = &self.on_change {
            handler(value);
        }
    }
}
