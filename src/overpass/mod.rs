mod client;
pub mod query;
pub mod response;

pub use client::OverpassClient;
pub use query::OverpassQuery;
pub use response::{parse_response, OverpassResponse};
