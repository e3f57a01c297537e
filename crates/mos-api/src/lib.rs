pub mod http;
pub mod schema;

pub use http::{build_router, run, HttpServerConfig};
