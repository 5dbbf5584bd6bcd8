//! Presentation-neutral view state shared by pages and tables.

mod boundary;
pub mod messages;

pub use boundary::{Boundary, BoundaryFallbacks, ErrorFallback};
