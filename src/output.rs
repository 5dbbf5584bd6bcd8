//! Plain-text and JSON rendering of command results.

use blog_app::BlogRow;
use blog_console::commands::{BlogDetailDto, BlogTableDto};
use serde::Serialize;

pub fn to_json(value: &impl Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {e}"))
}

/// Left-aligned columns under the table headers, or the empty message.
pub fn render_table(table: &BlogTableDto) -> String {
    if let Some(message) = &table.empty_message {
        return message.clone();
    }

    let cells: Vec<[&str; 3]> = table
        .rows
        .iter()
        .map(|row| [row.id.as_str(), row.name.as_str(), row.created_at.as_str()])
        .collect();

    let mut widths = BlogRow::HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |row: &[&str; 3]| {
        let padded: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut lines = vec![line(&BlogRow::HEADERS)];
    lines.extend(cells.iter().map(line));
    lines.join("\n")
}

/// `key: value` lines; unset fields are skipped.
pub fn render_detail(detail: &BlogDetailDto) -> String {
    let known = [
        ("id", Some(&detail.id)),
        ("name", detail.name.as_ref()),
        ("title", detail.title.as_ref()),
        ("author", detail.author.as_ref()),
        ("createdAt", detail.created_at.as_ref()),
        ("image", detail.image.as_ref()),
        ("content", detail.content.as_ref()),
    ];

    let mut lines: Vec<String> = known
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}: {}", preview(key, v))))
        .collect();
    lines.extend(
        detail
            .extra
            .iter()
            .map(|(key, value)| format!("{key}: {value}")),
    );
    lines.join("\n")
}

const IMAGE_PREVIEW_CHARS: usize = 60;

/// Embedded images are long; only their head is printed.
fn preview(key: &str, value: &str) -> String {
    if key == "image" && value.chars().count() > IMAGE_PREVIEW_CHARS {
        let head: String = value.chars().take(IMAGE_PREVIEW_CHARS).collect();
        format!("{head}... ({} chars)", value.chars().count())
    } else {
        value.to_string()
    }
}
