/// Centralized error mapping for commands.
///
/// Keeps the context chain (`outer: inner`) so the user sees why a file
/// could not be read, not only that it failed.
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}
