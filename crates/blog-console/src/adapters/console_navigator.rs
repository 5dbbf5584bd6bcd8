use std::sync::{Mutex, PoisonError};

use blog_core::ports::NavigatorPort;
use blog_core::routes::{Route, BLOGS_PATH};
use tracing::debug;

/// In-process router: remembers the current path so pages can read their
/// route parameters, the way a browser location would.
#[derive(Debug)]
pub struct ConsoleNavigator {
    current: Mutex<String>,
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self::new(BLOGS_PATH)
    }
}

impl ConsoleNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: Mutex::new(initial.into()),
        }
    }
}

impl NavigatorPort for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(from = %current, to = %path, "navigate");
        *current = path.to_string();
    }

    fn current_path(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn path_param(&self, name: &str) -> Option<String> {
        Route::parse(&self.current_path())?.param(name)
    }
}
