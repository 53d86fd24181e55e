pub mod browser;
pub mod http;

pub use http::{build_router, no_cache_headers, serve};
