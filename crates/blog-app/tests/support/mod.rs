#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blog_app::{BlogService, ComponentScope};
use blog_core::blog::{Document, DocumentFields, FieldValue};
use blog_core::ports::{DocumentStorePort, NavigatorPort, StoreError, UiPort};
use blog_core::Route;
use blog_infra::InMemoryDocumentStore;
use mockall::mock;
use tokio::sync::Semaphore;

mock! {
    pub Ui {}

    impl UiPort for Ui {
        fn confirm(&self, message: &str) -> bool;
        fn alert(&self, message: &str);
    }
}

/// Records every navigation; path params come from the current path.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
    current: Mutex<String>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            visited: Mutex::new(Vec::new()),
            current: Mutex::new(path.to_string()),
        }
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
        *self.current.lock().unwrap() = path.to_string();
    }

    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn path_param(&self, name: &str) -> Option<String> {
        Route::parse(&self.current_path())?.param(name)
    }
}

/// In-memory store with call counters, injectable failures and an
/// optional gate that holds writes until the test releases them.
pub struct ScriptedStore {
    inner: InMemoryDocumentStore,
    gate: Option<Arc<Semaphore>>,
    waiting: AtomicUsize,
    list_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_get: AtomicBool,
    fail_writes: AtomicBool,
    failing_deletes: Mutex<HashSet<String>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryDocumentStore::new(),
            gate: None,
            waiting: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
            fail_get: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            failing_deletes: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_names(names: &[(&str, &str)]) -> Self {
        let docs = names.iter().map(|(id, name)| {
            let mut fields = DocumentFields::new();
            fields.insert("name".into(), FieldValue::from(*name));
            Document::new(*id, fields)
        });
        Self {
            inner: InMemoryDocumentStore::new().with_documents(docs),
            ..Self::new()
        }
    }

    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn fail_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    pub fn fail_get(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_delete_of(&self, id: &str) {
        self.failing_deletes.lock().unwrap().insert(id.to_string());
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Writes currently parked at the gate.
    pub fn waiting(&self) -> usize {
        self.waiting.load(Ordering::SeqCst)
    }

    pub async fn wait_for_parked(&self, count: usize) {
        while self.waiting() < count {
            tokio::task::yield_now().await;
        }
    }

    pub async fn ids(&self) -> Vec<String> {
        self.inner
            .list_documents()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            self.waiting.fetch_add(1, Ordering::SeqCst);
            gate.acquire().await.unwrap().forget();
            self.waiting.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn write_failure(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected {
                status: 403,
                code: "PERMISSION_DENIED".into(),
                message: "Missing or insufficient permissions.".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStorePort for ScriptedStore {
    async fn list_documents(&self) -> Result<Vec<Document>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection reset".into()));
        }
        self.inner.list_documents().await
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>, StoreError> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection reset".into()));
        }
        self.inner.get_document(id).await
    }

    async fn add_document(
        &self,
        fields: DocumentFields,
        server_timestamp_field: Option<&str>,
    ) -> Result<String, StoreError> {
        self.pass_gate().await;
        self.write_failure()?;
        self.inner.add_document(fields, server_timestamp_field).await
    }

    async fn update_document(&self, id: &str, fields: DocumentFields) -> Result<(), StoreError> {
        self.pass_gate().await;
        self.write_failure()?;
        self.inner.update_document(id, fields).await
    }

    async fn delete_document(&self, id: &str) -> Result<(), StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        self.write_failure()?;
        if self.failing_deletes.lock().unwrap().contains(id) {
            return Err(StoreError::Transport("timeout".into()));
        }
        self.inner.delete_document(id).await
    }
}

pub fn service(store: Arc<ScriptedStore>) -> Arc<BlogService> {
    Arc::new(BlogService::from_ports(store))
}

pub fn confirming_ui() -> Arc<MockUi> {
    let mut ui = MockUi::new();
    ui.expect_confirm().return_const(true);
    ui.expect_alert().return_const(());
    Arc::new(ui)
}

pub fn scope() -> ComponentScope {
    ComponentScope::new()
}
