use super::messages;

/// How an error is rendered by a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFallback {
    /// Always the same text; the error detail is only logged.
    Fixed(&'static str),
    /// Prefix followed by the error message.
    Prefixed(&'static str),
}

impl ErrorFallback {
    pub fn render(&self, error: &str) -> String {
        match self {
            ErrorFallback::Fixed(text) => (*text).to_string(),
            ErrorFallback::Prefixed(prefix) => format!("{prefix}{error}"),
        }
    }
}

/// Fallback texts of one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryFallbacks {
    pub loading: &'static str,
    pub error: ErrorFallback,
}

impl BoundaryFallbacks {
    /// List page.
    pub const DEFAULT: BoundaryFallbacks = BoundaryFallbacks {
        loading: messages::LOADING,
        error: ErrorFallback::Fixed(messages::SOMETHING_WENT_WRONG),
    };

    pub const EDIT_PAGE: BoundaryFallbacks = BoundaryFallbacks {
        loading: messages::LOADING_BLOG,
        error: ErrorFallback::Prefixed(messages::ERROR_LOADING_BLOG_PREFIX),
    };

    pub const TABLE_DELETE: BoundaryFallbacks = BoundaryFallbacks {
        loading: messages::DELETING_POST,
        error: ErrorFallback::Prefixed(messages::ERROR_PREFIX),
    };
}

impl Default for BoundaryFallbacks {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Loading first, then error, then content.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary<T> {
    Loading(String),
    Failed(String),
    Ready(T),
}

impl<T> Boundary<T> {
    pub fn resolve(
        loading: bool,
        error: Option<&str>,
        content: T,
        fallbacks: &BoundaryFallbacks,
    ) -> Self {
        if loading {
            return Boundary::Loading(fallbacks.loading.to_string());
        }
        if let Some(error) = error {
            return Boundary::Failed(fallbacks.error.render(error));
        }
        Boundary::Ready(content)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Boundary::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Boundary::Ready(content) => Some(content),
            _ => None,
        }
    }

    /// Fallback text, if the boundary is not showing content.
    pub fn fallback_text(&self) -> Option<&str> {
        match self {
            Boundary::Loading(text) | Boundary::Failed(text) => Some(text),
            Boundary::Ready(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Boundary<U> {
        match self {
            Boundary::Loading(text) => Boundary::Loading(text),
            Boundary::Failed(text) => Boundary::Failed(text),
            Boundary::Ready(content) => Boundary::Ready(f(content)),
        }
    }
}
