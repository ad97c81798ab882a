pub mod asset;
pub mod event;
pub mod geo;
