use std::process::ExitCode;

use blog_admin_lib::cli::{self, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = blog_console::bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {e}");
    }

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!(error = %message, "command failed");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
