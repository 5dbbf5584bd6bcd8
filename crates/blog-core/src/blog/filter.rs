use super::Blog;

/// Text column a search filter can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Id,
    Name,
    Title,
    Content,
    Author,
}

impl SearchKey {
    fn value<'a>(&self, blog: &'a Blog) -> &'a str {
        match self {
            SearchKey::Id => blog.id.as_str(),
            SearchKey::Name => blog.display_name(),
            SearchKey::Title => blog.title.as_deref().unwrap_or(""),
            SearchKey::Content => blog.content.as_deref().unwrap_or(""),
            SearchKey::Author => blog.author.as_deref().unwrap_or(""),
        }
    }
}

/// Case-insensitive substring filter over one or more text keys.
///
/// A row matches when any key contains the query. An empty query matches
/// everything; a missing value is treated as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    keys: Vec<SearchKey>,
}

impl SearchFilter {
    pub fn new(keys: Vec<SearchKey>) -> Self {
        Self { keys }
    }

    /// The list view's filter: `name` only.
    pub fn by_name() -> Self {
        Self::new(vec![SearchKey::Name])
    }

    pub fn matches(&self, blog: &Blog, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.keys
            .iter()
            .any(|key| key.value(blog).to_lowercase().contains(&needle))
    }

    /// Filters while preserving the original relative order.
    pub fn apply<'a>(&self, blogs: &'a [Blog], query: &str) -> Vec<&'a Blog> {
        blogs.iter().filter(|b| self.matches(b, query)).collect()
    }
}
