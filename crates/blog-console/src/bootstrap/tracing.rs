//! Tracing configuration for the blog admin
//!
//! ## Behavior / 行为
//!
//! - **Environment filter**: respects `RUST_LOG`, otherwise debug in debug
//!   builds and info in release builds
//! - **stderr**: always; stdout is kept for command output
//! - **File**: `<data_dir>/logs/blog-admin.log` when the directory can be
//!   created, otherwise stderr only

use std::{fs, io, sync::OnceLock};

use blog_app::app_paths::AppPaths;
use blog_core::ports::AppDirsPort;
use blog_infra::DirsAppDirsAdapter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("blog_app={level}"),
        format!("blog_infra={level}"),
        "reqwest=warn".to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber.
/// 初始化全局 tracing 订阅者。
///
/// Call once from `main` before running any command:
///
/// ```ignore
/// blog_console::bootstrap::tracing::init_tracing_subscriber()?;
/// ```
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
    };

    // "2025-01-15 10:30:45.123 INFO blog_app::pages: src/pages/blog_list.rs:42: message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry().with(env_filter).with(stderr_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&app_dirs);
    fs::create_dir_all(&paths.logs_dir)?;

    let file_name = paths
        .log_file
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "blog-admin.log".into());
    let appender = tracing_appender::rolling::never(&paths.logs_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // Only the first guard is kept alive.
    let _ = LOG_GUARD.set(guard);
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_follow_build_profile() {
        let dev = build_filter_directives(true);
        assert_eq!(dev[0], "debug");
        assert!(dev.contains(&"blog_infra=debug".to_string()));
        assert!(dev.contains(&"reqwest=warn".to_string()));

        let prod = build_filter_directives(false);
        assert_eq!(prod[0], "info");
        assert!(prod.contains(&"blog_app=info".to_string()));
        assert!(prod.contains(&"hyper=warn".to_string()));
    }

    #[test]
    fn test_filter_directives_parse() {
        let directives = build_filter_directives(true).join(",");
        assert!(tracing_subscriber::EnvFilter::try_new(directives).is_ok());
    }
}
