use std::collections::BTreeMap;

use crate::blog::{fields, Blog, BlogDraft};
use crate::upload::DataUrl;

/// Editable fields of the blog form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Title,
    Content,
    Image,
    Author,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Title,
        FormField::Content,
        FormField::Image,
        FormField::Author,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => fields::NAME,
            FormField::Title => fields::TITLE,
            FormField::Content => fields::CONTENT,
            FormField::Image => fields::IMAGE,
            FormField::Author => fields::AUTHOR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Blog Name:",
            FormField::Title => "Blog Title:",
            FormField::Content => "Content:",
            FormField::Image => "Blog Image:",
            FormField::Author => "Author:",
        }
    }
}

/// Current text of every form field. Unset fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFormValues {
    pub name: String,
    pub title: String,
    pub content: String,
    pub image: String,
    pub author: String,
}

impl BlogFormValues {
    /// Seeds the form from an existing record (edit mode).
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            name: blog.name.clone().unwrap_or_default(),
            title: blog.title.clone().unwrap_or_default(),
            content: blog.content.clone().unwrap_or_default(),
            image: blog.image.clone().unwrap_or_default(),
            author: blog.author.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Title => &self.title,
            FormField::Content => &self.content,
            FormField::Image => &self.image,
            FormField::Author => &self.author,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Title => self.title = value,
            FormField::Content => self.content = value,
            FormField::Image => self.image = value,
            FormField::Author => self.author = value,
        }
    }

    /// Every field is submitted, empty or not.
    pub fn to_draft(&self) -> BlogDraft {
        BlogDraft {
            name: Some(self.name.clone()),
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            author: Some(self.author.clone()),
            image: Some(self.image.clone()),
            extra: Default::default(),
        }
    }

    /// Messages shown next to fields. Display only; never blocks submit.
    pub fn advisory_errors(&self) -> BTreeMap<FormField, String> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Blog name is empty".to_string());
        }
        if !self.image.is_empty()
            && !DataUrl::is_data_url(&self.image)
            && !self.image.starts_with("http://")
            && !self.image.starts_with("https://")
        {
            errors.insert(
                FormField::Image,
                "Image must be a web URL or an embedded image".to_string(),
            );
        }
        errors
    }
}
