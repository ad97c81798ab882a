pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod overpass;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod types;
