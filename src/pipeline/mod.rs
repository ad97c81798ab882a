pub mod geometry;
pub mod ticker;
pub mod timeline;
