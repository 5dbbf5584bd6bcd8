use std::path::PathBuf;

use blog_core::app_dirs::AppDirs;

/// Concrete file locations derived from the application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub logs_dir: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        let logs_dir = dirs.logs_dir();
        Self {
            config_file: dirs.default_config_file(),
            log_file: logs_dir.join("blog-admin.log"),
            logs_dir,
        }
    }
}
