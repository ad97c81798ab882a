pub mod assets;
pub mod catalog;
pub mod datasets;
pub mod geometry;
pub mod health;
pub mod playback;
