//! Data transfer objects printed by the commands (`--json` or a table).
//! 命令输出的数据传输对象。

use blog_app::{BlogRow, BlogTableController};
use blog_core::Blog;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One table row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogRowDto {
    pub id: String,
    pub name: String,
    /// `YYYY-MM-DD`, empty when unknown.
    pub created_at: String,
}

impl From<BlogRow> for BlogRowDto {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// The blog table after filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogTableDto {
    pub filter: String,
    pub rows: Vec<BlogRowDto>,
    /// `"No posts found."` when nothing is visible.
    pub empty_message: Option<String>,
}

impl BlogTableDto {
    pub fn from_table(table: &BlogTableController) -> Self {
        Self {
            filter: table.filter(),
            rows: table.render_rows().into_iter().map(BlogRowDto::from).collect(),
            empty_message: table.empty_message().map(str::to_string),
        }
    }
}

/// Every field of one record, including those this tool does not manage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailDto {
    pub id: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    /// RFC 3339, UTC.
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}

impl From<Blog> for BlogDetailDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            name: blog.name,
            title: blog.title,
            content: blog.content,
            author: blog.author,
            image: blog.image,
            created_at: blog
                .created_at
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            extra: blog
                .extra
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        }
    }
}

/// Result of a successful add or edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedBlogDto {
    pub id: Option<String>,
    /// Path the form navigated to.
    pub location: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeleteStatus {
    Deleted,
    Declined,
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::blog::{Document, DocumentFields, FieldValue};
    use chrono::{TimeZone, Utc};

    #[test]
    fn detail_keeps_unknown_fields_as_json() {
        let mut fields = DocumentFields::new();
        fields.insert("name".into(), FieldValue::from("A"));
        fields.insert("views".into(), FieldValue::Integer(7));
        fields.insert(
            "createdAt".into(),
            FieldValue::from(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        );
        let dto = BlogDetailDto::from(Blog::from_document(Document::new("b1", fields)));

        assert_eq!(dto.id, "b1");
        assert_eq!(dto.name.as_deref(), Some("A"));
        assert_eq!(dto.created_at.as_deref(), Some("2024-05-01T12:00:00.000Z"));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["extra"]["views"], 7);
        assert_eq!(json["title"], Value::Null);
    }

    #[test]
    fn detail_omits_empty_extra() {
        let dto = BlogDetailDto::from(Blog::from_document(Document::new(
            "b1",
            DocumentFields::new(),
        )));
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("extra").is_none());
    }

    #[test]
    fn delete_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DeleteStatus::Declined).unwrap(),
            "\"declined\""
        );
    }
}
