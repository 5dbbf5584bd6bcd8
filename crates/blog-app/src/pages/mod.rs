//! Page controllers for the three admin routes.

mod add_blog;
mod blog_list;
mod edit_blog;

pub use add_blog::AddBlogPage;
pub use blog_list::BlogListPage;
pub use edit_blog::{EditBlogPage, EditPageContent, EditPageError};
