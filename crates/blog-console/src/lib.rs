//! # blog-console
//!
//! Composition root of the blog admin: configuration loading, tracing,
//! dependency wiring, the terminal presentation adapters and the commands
//! the binary dispatches to.

pub mod adapters;
pub mod bootstrap;
pub mod commands;

pub use bootstrap::{build_runtime, AppRuntime, RunOptions};
