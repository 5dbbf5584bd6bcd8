//! Command line definition and dispatch.
//! 命令行定义与分发。

use std::io::Write;
use std::path::PathBuf;

use blog_console::bootstrap::{build_runtime, AppRuntime, RunOptions};
use blog_console::commands::{self, map_err, BlogInput, DeleteStatus};
use clap::{Args, Parser, Subcommand};

use crate::output;

#[derive(Debug, Parser)]
#[command(name = "blog-admin", version, about = "Manage blog posts")]
pub struct Cli {
    /// Config file. Defaults to $BLOG_ADMIN_CONFIG, then
    /// <config_dir>/blog-admin/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List blogs
    List {
        /// Only show blogs whose name contains TEXT (case-insensitive)
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show every field of one blog
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Create a blog
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Update a blog; omitted fields keep their value
    Edit {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
        /// Clear the image (applied before --image)
        #[arg(long)]
        remove_image: bool,
    },
    /// Delete a blog
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    /// Image file to embed; the type is taken from the extension
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

impl FieldArgs {
    fn into_input(self, remove_image: bool) -> BlogInput {
        BlogInput {
            name: self.name,
            title: self.title,
            content: self.content,
            author: self.author,
            image: self.image,
            remove_image,
        }
    }
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config.clone(),
            assume_yes: matches!(self.command, Commands::Delete { yes: true, .. }),
        }
    }
}

/// Builds the runtime from the config and runs the command, writing its
/// output to stdout.
pub async fn run(cli: Cli) -> Result<(), String> {
    let runtime = build_runtime(&cli.run_options()).map_err(map_err)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(&runtime, cli.command, &mut stdout).await
}

pub async fn dispatch(
    runtime: &AppRuntime,
    command: Commands,
    out: &mut impl Write,
) -> Result<(), String> {
    let text = match command {
        Commands::List { filter, json } => {
            let table = commands::list_blogs(runtime, filter.as_deref()).await?;
            if json {
                output::to_json(&table)?
            } else {
                output::render_table(&table)
            }
        }
        Commands::Show { id, json } => {
            let detail = commands::show_blog(runtime, &id).await?;
            if json {
                output::to_json(&detail)?
            } else {
                output::render_detail(&detail)
            }
        }
        Commands::Add { fields } => {
            let saved = commands::add_blog(runtime, fields.into_input(false)).await?;
            format!("Created blog {}", saved.id.unwrap_or_default())
        }
        Commands::Edit {
            id,
            fields,
            remove_image,
        } => {
            commands::edit_blog(runtime, &id, fields.into_input(remove_image)).await?;
            format!("Updated blog {id}")
        }
        Commands::Delete { id, .. } => match commands::delete_blog(runtime, &id).await? {
            DeleteStatus::Deleted => format!("Deleted blog {id}"),
            DeleteStatus::Declined => "Delete cancelled".to_string(),
        },
    };

    writeln!(out, "{text}").map_err(|e| format!("Failed to write output: {e}"))
}
