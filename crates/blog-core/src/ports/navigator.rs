/// Routing collaborator.
pub trait NavigatorPort: Send + Sync {
    fn navigate(&self, path: &str);

    fn current_path(&self) -> String;

    /// Named parameter of the current route, e.g. `id` in `/manage/blogs/:id/edit`.
    fn path_param(&self, name: &str) -> Option<String>;
}
