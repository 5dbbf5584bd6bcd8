use std::time::Duration;

use blog_core::config::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_FIRESTORE_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Connection settings of one Firestore collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    /// Scheme and host, e.g. `https://firestore.googleapis.com` or an emulator.
    pub endpoint: String,
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    /// Documents requested per list page.
    pub page_size: u32,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_FIRESTORE_ENDPOINT.to_string(),
            project_id: project_id.into(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_size: 300,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// `projects/<p>/databases/<db>/documents`
    pub fn documents_path(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database
        )
    }

    /// Full resource name of a document in the configured collection.
    pub fn document_name(&self, id: &str) -> String {
        format!("{}/{}/{}", self.documents_path(), self.collection, id)
    }
}
