//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//! 配置数据结构以及 TOML → DTO 的映射。
//!
//! No validation happens here. An empty string or a zero is a valid "fact";
//! the composition root decides what an unset value means.
//! 此处不做任何验证。空字符串或 0 都是合法的"事实"，由组合根决定其含义。

/// Default collection holding the blog documents.
pub const DEFAULT_COLLECTION: &str = "demo-doc";
pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com";
pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `firestore`, `memory`, or empty
    pub store_backend: String,

    /// Base URL of the Firestore REST API
    pub firestore_endpoint: String,

    pub project_id: String,

    pub database: String,

    pub collection: String,

    /// Web API key appended as `key=`; empty when unused
    pub api_key: String,

    /// 0 means "not configured"
    pub request_timeout_secs: u64,

    /// 0 means "not configured"
    pub max_file_size_bytes: u64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys map to empty strings and zeros. Negative integers are
    /// treated as missing.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let store = toml_value.get("store");
        let upload = toml_value.get("upload");

        let store_str = |key: &str| {
            store
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            store_backend: store_str("backend"),
            firestore_endpoint: store_str("endpoint"),
            project_id: store_str("project_id"),
            database: store_str("database"),
            collection: store_str("collection"),
            api_key: store_str("api_key"),
            request_timeout_secs: store
                .and_then(|s| s.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(0),
            max_file_size_bytes: upload
                .and_then(|u| u.get("max_file_size_bytes"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(0),
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    /// 创建空的 AppConfig（所有字段为空/零）
    pub fn empty() -> Self {
        Self {
            store_backend: String::new(),
            firestore_endpoint: String::new(),
            project_id: String::new(),
            database: String::new(),
            collection: String::new(),
            api_key: String::new(),
            request_timeout_secs: 0,
            max_file_size_bytes: 0,
        }
    }

    /// Configuration used when no config file exists. Connection values
    /// are filled in; the store backend is left unset because there is no
    /// project to connect to.
    /// 没有配置文件时使用：填充连接默认值，存储后端保持未设置。
    pub fn with_defaults() -> Self {
        Self {
            store_backend: String::new(),
            firestore_endpoint: DEFAULT_FIRESTORE_ENDPOINT.to_string(),
            project_id: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key: String::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_file_size_bytes: crate::upload::MAX_FILE_SIZE_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_every_key() {
        let toml_str = r#"
            [store]
            backend = "firestore"
            endpoint = "http://localhost:8080"
            project_id = "demo"
            database = "(default)"
            collection = "posts"
            request_timeout_secs = 5

            [upload]
            max_file_size_bytes = 1024
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();
        assert_eq!(config.store_backend, "firestore");
        assert_eq!(config.firestore_endpoint, "http://localhost:8080");
        assert_eq!(config.project_id, "demo");
        assert_eq!(config.collection, "posts");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.max_file_size_bytes, 1024);
    }

    #[test]
    fn test_from_toml_leaves_missing_keys_empty() {
        let toml_value: Value = toml::from_str("[store]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_treats_negative_numbers_as_missing() {
        let toml_value: Value = toml::from_str("[upload]\nmax_file_size_bytes = -1\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();
        assert_eq!(config.max_file_size_bytes, 0);
    }

    #[test]
    fn test_with_defaults_leaves_backend_unset() {
        let config = AppConfig::with_defaults();
        assert_eq!(config.store_backend, "");
        assert_eq!(config.project_id, "");
        assert_eq!(config.collection, "demo-doc");
        assert_eq!(config.max_file_size_bytes, 5_242_880);
    }
}
