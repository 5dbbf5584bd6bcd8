//! Blog admin command line: argument parsing, dispatch and output
//! rendering on top of `blog-console`.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
