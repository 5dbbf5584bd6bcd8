use std::path::PathBuf;

/// Resolved per-user directories of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_config_root: PathBuf,
}

impl AppDirs {
    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }

    pub fn default_config_file(&self) -> PathBuf {
        self.app_config_root.join("config.toml")
    }
}
