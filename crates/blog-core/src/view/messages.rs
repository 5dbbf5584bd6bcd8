//! User-facing strings.

pub const LOADING: &str = "Loading...";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";
pub const LOADING_BLOG: &str = "Loading blog...";
pub const ERROR_LOADING_BLOG_PREFIX: &str = "Error loading blog: ";
pub const BLOG_NOT_FOUND: &str = "Blog not found";
pub const DELETING_POST: &str = "Deleting post...";
pub const ERROR_PREFIX: &str = "Error: ";
pub const NO_POSTS_FOUND: &str = "No posts found.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this post?";
pub const FAILED_TO_READ_FILE: &str = "Failed to read file";
