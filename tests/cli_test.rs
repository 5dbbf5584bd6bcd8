use std::path::PathBuf;
use std::sync::Arc;

use blog_admin_lib::cli::{dispatch, Cli, Commands};
use blog_console::adapters::AutoConfirmUi;
use blog_console::bootstrap::{runtime_from_config, AppRuntime};
use blog_core::config::AppConfig;
use clap::Parser;

fn memory_config() -> AppConfig {
    AppConfig {
        store_backend: "memory".to_string(),
        ..AppConfig::with_defaults()
    }
}

fn runtime() -> AppRuntime {
    runtime_from_config(&memory_config(), Arc::new(AutoConfirmUi)).unwrap()
}

async fn run(rt: &AppRuntime, args: &[&str]) -> Result<String, String> {
    let cli = Cli::try_parse_from(std::iter::once("blog-admin").chain(args.iter().copied()))
        .map_err(|e| e.to_string())?;
    let mut out = Vec::new();
    dispatch(rt, cli.command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn parses_global_config_and_edit_fields() {
    let cli = Cli::try_parse_from([
        "blog-admin",
        "edit",
        "b1",
        "--title",
        "X",
        "--image",
        "cover.png",
        "--remove-image",
        "--config",
        "/etc/blog.toml",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("/etc/blog.toml")));
    match cli.command {
        Commands::Edit {
            id,
            fields,
            remove_image,
        } => {
            assert_eq!(id, "b1");
            assert_eq!(fields.title.as_deref(), Some("X"));
            assert_eq!(fields.name, None);
            assert_eq!(fields.image, Some(PathBuf::from("cover.png")));
            assert!(remove_image);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn only_delete_with_yes_skips_confirmation() {
    let cli = Cli::try_parse_from(["blog-admin", "delete", "b1", "-y"]).unwrap();
    assert!(cli.run_options().assume_yes);

    let cli = Cli::try_parse_from(["blog-admin", "delete", "b1"]).unwrap();
    assert!(!cli.run_options().assume_yes);

    let cli = Cli::try_parse_from(["blog-admin", "list"]).unwrap();
    assert!(!cli.run_options().assume_yes);
    assert_eq!(cli.run_options().config_path, None);
}

#[test]
fn show_requires_an_id() {
    assert!(Cli::try_parse_from(["blog-admin", "show"]).is_err());
}

#[tokio::test]
async fn add_list_show_delete_round() {
    let rt = runtime();

    assert_eq!(run(&rt, &["list"]).await.unwrap(), "No posts found.\n");

    let created = run(&rt, &["add", "--name", "Alpha", "--author", "me"])
        .await
        .unwrap();
    let id = created
        .trim()
        .strip_prefix("Created blog ")
        .unwrap()
        .to_string();
    assert!(!id.is_empty());

    let listed = run(&rt, &["list"]).await.unwrap();
    let lines: Vec<&str> = listed.lines().collect();
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with(&id));
    assert!(lines[1].contains("Alpha"));

    let json = run(&rt, &["list", "--json", "--filter", "ALP"]).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rows"][0]["name"], "Alpha");

    let shown = run(&rt, &["show", &id]).await.unwrap();
    assert!(shown.contains("author: me"));

    assert_eq!(
        run(&rt, &["edit", &id, "--title", "X"]).await.unwrap(),
        format!("Updated blog {id}\n")
    );
    let json = run(&rt, &["show", &id, "--json"]).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "X");
    assert_eq!(value["name"], "Alpha");

    assert_eq!(
        run(&rt, &["delete", &id, "--yes"]).await.unwrap(),
        format!("Deleted blog {id}\n")
    );
    assert_eq!(run(&rt, &["show", &id]).await.unwrap_err(), "Blog not found");
}
