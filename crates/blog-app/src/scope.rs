//! Component liveness.
//!
//! 组件存活范围：卸载后到达的异步结果一律丢弃。

use tokio_util::sync::CancellationToken;

/// Liveness scope of one mounted component.
///
/// Cloning shares the scope. `unmount` is final; every async completion that
/// would mutate component state or navigate checks `is_live` first.
#[derive(Debug, Clone, Default)]
pub struct ComponentScope {
    token: CancellationToken,
}

impl ComponentScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope that ends when `self` ends, or earlier on its own `unmount`.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Runs `f` only while the component is still mounted.
    pub fn if_live<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_live() {
            Some(f())
        } else {
            None
        }
    }

    /// Resolves once the component is unmounted.
    pub async fn unmounted(&self) {
        self.token.cancelled().await
    }
}
