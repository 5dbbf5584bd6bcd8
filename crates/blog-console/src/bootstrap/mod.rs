pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

// Re-export commonly used bootstrap functions
pub use config::{load_config, load_config_from, resolve_config_source, ConfigSource};
pub use run::{build_runtime, runtime_from_config, RunOptions};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{ensure_persistent_backend, wire_dependencies, WiringError, WiringResult};
