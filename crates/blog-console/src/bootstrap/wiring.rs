//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Pick and construct the document store adapter / 选择并创建文档存储适配器
//! - ✅ Give unset config values their meaning / 为未设置的配置值赋予含义
//! - ✅ Bundle every port into `AppDeps` / 将所有端口打包为 `AppDeps`
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > This is the only place allowed to depend on blog-infra and blog-app
//! > at the same time. The privilege is for assembly, not decisions.
//! > 这是唯一允许同时依赖 blog-infra 和 blog-app 的地方，仅用于组装。

use std::sync::Arc;
use std::time::Duration;

use blog_app::AppDeps;
use blog_core::config::{
    AppConfig, DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_FIRESTORE_ENDPOINT,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use blog_core::ports::{DocumentStorePort, NavigatorPort, UiPort};
use blog_core::upload::UploadLimits;
use blog_infra::{
    DataUrlFileEncoder, FirestoreConfig, FirestoreDocumentStore, InMemoryDocumentStore,
    SystemClock,
};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error(
        "No store backend configured: set store.backend = \"firestore\" and store.project_id in the config file"
    )]
    BackendNotConfigured,

    #[error("The in-memory store keeps nothing after the process exits; use store.backend = \"firestore\"")]
    EphemeralBackend,

    #[error("Unknown store backend: {0} (expected \"firestore\" or \"memory\")")]
    UnknownBackend(String),

    #[error("Firestore backend requires store.project_id")]
    MissingProjectId,

    #[error("Document store initialization failed: {0}")]
    StoreInit(String),
}

/// Document store backends the composition root can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore,
    Memory,
}

impl StoreBackend {
    /// The backend must be named; there is no implicit choice.
    pub fn from_config(config: &AppConfig) -> WiringResult<Self> {
        match config.store_backend.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StoreBackend::Firestore),
            "memory" => Ok(StoreBackend::Memory),
            "" => Err(WiringError::BackendNotConfigured),
            other => Err(WiringError::UnknownBackend(other.to_string())),
        }
    }
}

/// Rejects configs whose records would not outlive the process. The CLI
/// runs one command per process, so only a remote store is usable there.
pub fn ensure_persistent_backend(config: &AppConfig) -> WiringResult<()> {
    match StoreBackend::from_config(config)? {
        StoreBackend::Firestore => Ok(()),
        StoreBackend::Memory => Err(WiringError::EphemeralBackend),
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

/// Maps the config DTO onto Firestore connection settings, filling unset
/// values with the defaults.
pub fn firestore_config(config: &AppConfig) -> WiringResult<FirestoreConfig> {
    if config.project_id.trim().is_empty() {
        return Err(WiringError::MissingProjectId);
    }

    let timeout_secs = match config.request_timeout_secs {
        0 => DEFAULT_REQUEST_TIMEOUT_SECS,
        secs => secs,
    };

    let mut firestore = FirestoreConfig::new(config.project_id.trim())
        .with_endpoint(or_default(&config.firestore_endpoint, DEFAULT_FIRESTORE_ENDPOINT))
        .with_database(or_default(&config.database, DEFAULT_DATABASE))
        .with_collection(or_default(&config.collection, DEFAULT_COLLECTION))
        .with_request_timeout(Duration::from_secs(timeout_secs));

    if !config.api_key.trim().is_empty() {
        firestore = firestore.with_api_key(config.api_key.trim());
    }

    Ok(firestore)
}

/// Builds the document store selected by `config`.
pub fn build_document_store(config: &AppConfig) -> WiringResult<Arc<dyn DocumentStorePort>> {
    match StoreBackend::from_config(config)? {
        StoreBackend::Firestore => {
            let firestore = firestore_config(config)?;
            info!(
                endpoint = %firestore.endpoint,
                project_id = %firestore.project_id,
                collection = %firestore.collection,
                "using Firestore document store"
            );
            let store = FirestoreDocumentStore::new(firestore)
                .map_err(|e| WiringError::StoreInit(e.to_string()))?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            info!("using in-memory document store");
            Ok(Arc::new(InMemoryDocumentStore::with_clock(Arc::new(
                SystemClock,
            ))))
        }
    }
}

/// Wire every port into `AppDeps`.
/// 将所有端口注入 `AppDeps`。
///
/// The presentation adapters are passed in because the caller decides how
/// the user is prompted (interactive terminal or `--yes`).
pub fn wire_dependencies(
    config: &AppConfig,
    navigator: Arc<dyn NavigatorPort>,
    ui: Arc<dyn UiPort>,
) -> WiringResult<AppDeps> {
    let document_store = build_document_store(config)?;
    Ok(AppDeps {
        document_store,
        file_encoder: Arc::new(DataUrlFileEncoder::new()),
        upload_limits: UploadLimits::from_configured(config.max_file_size_bytes),
        navigator,
        ui,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::upload::MAX_FILE_SIZE_BYTES;

    fn firestore(project_id: &str) -> AppConfig {
        AppConfig {
            store_backend: "firestore".to_string(),
            project_id: project_id.to_string(),
            ..AppConfig::empty()
        }
    }

    #[test]
    fn backend_is_case_insensitive_and_must_be_named() {
        let mut config = AppConfig::empty();
        assert!(matches!(
            StoreBackend::from_config(&config),
            Err(WiringError::BackendNotConfigured)
        ));

        config.store_backend = " Memory ".to_string();
        assert_eq!(StoreBackend::from_config(&config).unwrap(), StoreBackend::Memory);

        config.store_backend = "Firestore".to_string();
        assert_eq!(StoreBackend::from_config(&config).unwrap(), StoreBackend::Firestore);

        config.store_backend = "sqlite".to_string();
        assert!(matches!(
            StoreBackend::from_config(&config),
            Err(WiringError::UnknownBackend(name)) if name == "sqlite"
        ));
    }

    #[test]
    fn firestore_config_fills_unset_values() {
        let config = firestore("demo");
        let fs = firestore_config(&config).unwrap();

        assert_eq!(fs.endpoint, DEFAULT_FIRESTORE_ENDPOINT);
        assert_eq!(fs.database, DEFAULT_DATABASE);
        assert_eq!(fs.collection, DEFAULT_COLLECTION);
        assert_eq!(fs.api_key, None);
        assert_eq!(
            fs.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn firestore_config_keeps_configured_values() {
        let config = AppConfig {
            firestore_endpoint: "http://localhost:8080".to_string(),
            database: "emu".to_string(),
            collection: "posts".to_string(),
            api_key: "k".to_string(),
            request_timeout_secs: 5,
            ..firestore("demo")
        };
        let fs = firestore_config(&config).unwrap();

        assert_eq!(fs.endpoint, "http://localhost:8080");
        assert_eq!(fs.database, "emu");
        assert_eq!(fs.collection, "posts");
        assert_eq!(fs.api_key.as_deref(), Some("k"));
        assert_eq!(fs.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn firestore_requires_project_id() {
        assert!(matches!(
            firestore_config(&firestore("  ")),
            Err(WiringError::MissingProjectId)
        ));
        assert!(matches!(
            build_document_store(&firestore("")),
            Err(WiringError::MissingProjectId)
        ));
    }

    #[test]
    fn only_firestore_counts_as_persistent() {
        assert!(ensure_persistent_backend(&firestore("demo")).is_ok());

        let memory = AppConfig {
            store_backend: "memory".to_string(),
            ..AppConfig::with_defaults()
        };
        assert!(matches!(
            ensure_persistent_backend(&memory),
            Err(WiringError::EphemeralBackend)
        ));
        assert!(matches!(
            ensure_persistent_backend(&AppConfig::with_defaults()),
            Err(WiringError::BackendNotConfigured)
        ));
    }

    #[test]
    fn defaults_alone_do_not_wire_a_store() {
        assert!(matches!(
            build_document_store(&AppConfig::with_defaults()),
            Err(WiringError::BackendNotConfigured)
        ));
    }

    #[tokio::test]
    async fn memory_backend_starts_empty() {
        let config = AppConfig {
            store_backend: "memory".to_string(),
            ..AppConfig::with_defaults()
        };
        let store = build_document_store(&config).unwrap();
        assert!(store.list_documents().await.unwrap().is_empty());
    }

    #[test]
    fn unset_upload_limit_uses_default() {
        assert_eq!(
            UploadLimits::from_configured(AppConfig::empty().max_file_size_bytes)
                .max_file_size_bytes,
            MAX_FILE_SIZE_BYTES
        );
    }
}
