//! Route table of the admin UI.

use crate::ids::BlogId;

pub const BLOGS_PATH: &str = "/manage/blogs";
pub const ADD_BLOG_PATH: &str = "/manage/blogs/add";
pub const ID_PARAM: &str = "id";

pub fn edit_blog_path(id: &BlogId) -> String {
    format!("{BLOGS_PATH}/{id}/edit")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    BlogList,
    AddBlog,
    EditBlog { id: BlogId },
}

impl Route {
    /// Matches a path against the route table. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path == BLOGS_PATH {
            return Some(Route::BlogList);
        }
        if path == ADD_BLOG_PATH {
            return Some(Route::AddBlog);
        }
        let rest = path.strip_prefix(BLOGS_PATH)?.strip_prefix('/')?;
        let id = rest.strip_suffix("/edit")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::EditBlog {
            id: BlogId::from(id),
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::BlogList => BLOGS_PATH.to_string(),
            Route::AddBlog => ADD_BLOG_PATH.to_string(),
            Route::EditBlog { id } => edit_blog_path(id),
        }
    }

    /// Value of a named path parameter, if the route has one.
    pub fn param(&self, name: &str) -> Option<String> {
        match (self, name) {
            (Route::EditBlog { id }, ID_PARAM) => Some(id.to_string()),
            _ => None,
        }
    }
}
