mod client;
mod resolver;
mod search_response;

pub use client::{PlacesClientError, new_client};
pub use resolver::resolve_schools;
