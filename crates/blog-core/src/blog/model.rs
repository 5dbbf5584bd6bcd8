use chrono::{DateTime, Local, NaiveDate, Utc};

use super::{fields, Document, DocumentFields, FieldValue};
use crate::ids::BlogId;

/// A stored blog record.
///
/// Known fields are lifted out of the document only when they hold the
/// expected type; everything else stays in `extra` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: BlogId,
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// Remote URL or embedded data URL.
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub extra: DocumentFields,
}

impl Blog {
    /// Merges the document identity into the record shape.
    pub fn from_document(document: Document) -> Self {
        let mut blog = Self {
            id: BlogId::from(document.id),
            name: None,
            title: None,
            content: None,
            author: None,
            image: None,
            created_at: None,
            extra: DocumentFields::new(),
        };

        for (key, value) in document.fields {
            match (key.as_str(), value) {
                (fields::NAME, FieldValue::String(s)) => blog.name = Some(s),
                (fields::TITLE, FieldValue::String(s)) => blog.title = Some(s),
                (fields::CONTENT, FieldValue::String(s)) => blog.content = Some(s),
                (fields::AUTHOR, FieldValue::String(s)) => blog.author = Some(s),
                (fields::IMAGE, FieldValue::String(s)) => blog.image = Some(s),
                (fields::CREATED_AT, FieldValue::Timestamp(ts)) => blog.created_at = Some(ts),
                (_, value) => {
                    #[cfg(feature = "tracing")]
                    {
                        if fields::KNOWN.contains(&key.as_str()) {
                            tracing::debug!(
                                field = %key,
                                found = value.type_name(),
                                "known field has unexpected type, keeping it in extra"
                            );
                        }
                    }
                    blog.extra.insert(key, value);
                }
            }
        }

        blog
    }

    /// Name used for display and filtering; empty when unset.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Creation timestamp as a calendar date in the local time zone.
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at
            .map(|ts| ts.with_timezone(&Local).date_naive())
    }

    /// Drops identity and timestamp, keeping every other field for a write.
    pub fn into_draft(self) -> BlogDraft {
        BlogDraft {
            name: self.name,
            title: self.title,
            content: self.content,
            author: self.author,
            image: self.image,
            extra: self.extra,
        }
    }
}

/// Field set for create and partial update.
///
/// `None` means "not supplied": the field is neither sent on create nor
/// touched on update. There is deliberately no identifier here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub extra: DocumentFields,
}

impl BlogDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.image.is_none()
            && self.extra.is_empty()
    }

    /// Flattens the draft into document fields. Known fields win over `extra`.
    pub fn into_fields(self) -> DocumentFields {
        let mut out = self.extra;
        let known = [
            (fields::NAME, self.name),
            (fields::TITLE, self.title),
            (fields::CONTENT, self.content),
            (fields::AUTHOR, self.author),
            (fields::IMAGE, self.image),
        ];
        for (key, value) in known {
            if let Some(value) = value {
                out.insert(key.to_string(), FieldValue::String(value));
            }
        }
        out
    }
}
