//! Startup sequence: config → dependencies → runtime.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use blog_core::config::AppConfig;
use blog_core::ports::UiPort;
use blog_infra::DirsAppDirsAdapter;
use tracing::info;

use super::config::{load_config_from, resolve_config_source};
use super::runtime::AppRuntime;
use super::wiring::{ensure_persistent_backend, wire_dependencies};
use crate::adapters::{AutoConfirmUi, ConsoleNavigator, TerminalUi};

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// `--config`
    pub config_path: Option<PathBuf>,
    /// Accept confirmations without prompting.
    pub assume_yes: bool,
}

/// Resolves and loads the configuration, then wires the runtime.
///
/// Fails unless the config selects a persistent store: each CLI invocation
/// is its own process, so in-memory records would be gone before the next
/// command.
pub fn build_runtime(options: &RunOptions) -> anyhow::Result<AppRuntime> {
    let source = resolve_config_source(options.config_path.clone(), &DirsAppDirsAdapter::new())?;
    let config = load_config_from(&source)?;
    info!(source = ?source, backend = %config.store_backend, "configuration loaded");
    ensure_persistent_backend(&config)
        .with_context(|| format!("Unusable configuration from {source:?}"))?;

    let ui: Arc<dyn UiPort> = if options.assume_yes {
        Arc::new(AutoConfirmUi)
    } else {
        Arc::new(TerminalUi::stdio())
    };
    runtime_from_config(&config, ui)
}

/// Wires a runtime from an already loaded config. The navigator starts on
/// the blog list. Any backend is accepted here, including `memory`.
pub fn runtime_from_config(config: &AppConfig, ui: Arc<dyn UiPort>) -> anyhow::Result<AppRuntime> {
    let deps = wire_dependencies(config, Arc::new(ConsoleNavigator::default()), ui)
        .context("Failed to wire dependencies")?;
    Ok(AppRuntime::new(deps))
}
