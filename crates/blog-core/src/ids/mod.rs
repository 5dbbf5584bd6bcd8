mod blog_id;
mod id_macro;

pub use blog_id::BlogId;
