//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Locate the configuration file / 定位配置文件
//! - ✅ Parse TOML into the AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! What an empty value means is decided in `wiring.rs`.
//! 空值的含义由 `wiring.rs` 决定。

use std::path::{Path, PathBuf};

use anyhow::Context;
use blog_app::app_paths::AppPaths;
use blog_core::config::AppConfig;
use blog_core::ports::AppDirsPort;
use tracing::{debug, info};

/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "BLOG_ADMIN_CONFIG";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line.
    Explicit(PathBuf),
    /// `BLOG_ADMIN_CONFIG`.
    Env(PathBuf),
    /// `<config_dir>/blog-admin/config.toml`.
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Env(p) | ConfigSource::Default(p) => p,
        }
    }

    /// Only the default location may be absent.
    fn required(&self) -> bool {
        !matches!(self, ConfigSource::Default(_))
    }
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Pure data loading: missing keys become empty values, nothing is
/// validated.
/// 纯数据加载：缺失的键变为空值，不做任何验证。
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Picks the config file: `explicit`, then `BLOG_ADMIN_CONFIG` (a `.env`
/// file in the working directory is read first), then the default
/// location under the application config directory.
pub fn resolve_config_source(
    explicit: Option<PathBuf>,
    app_dirs: &dyn AppDirsPort,
) -> anyhow::Result<ConfigSource> {
    if let Some(path) = explicit {
        return Ok(ConfigSource::Explicit(path));
    }

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to read .env file");
        }
    }

    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => return Ok(ConfigSource::Env(PathBuf::from(path))),
        _ => {}
    }

    let dirs = app_dirs
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    Ok(ConfigSource::Default(
        AppPaths::from_app_dirs(&dirs).config_file,
    ))
}

/// Loads the configuration from `source`. A missing default file yields
/// [`AppConfig::with_defaults`]; a missing explicit file is an error.
pub fn load_config_from(source: &ConfigSource) -> anyhow::Result<AppConfig> {
    let path = source.path();
    if !source.required() && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::with_defaults());
    }

    info!(path = %path.display(), "loading config");
    load_config(path.to_path_buf())
}
