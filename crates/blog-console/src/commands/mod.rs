pub mod blogs;
pub mod dto;
pub mod error;

pub use blogs::{add_blog, delete_blog, edit_blog, image_candidate, list_blogs, show_blog, BlogInput};
pub use dto::{BlogDetailDto, BlogRowDto, BlogTableDto, DeleteStatus, SavedBlogDto};
pub use error::map_err;
