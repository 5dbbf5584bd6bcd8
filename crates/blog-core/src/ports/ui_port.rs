/// Blocking user prompts.
pub trait UiPort: Send + Sync {
    /// Returns `true` only when the user accepted.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}
