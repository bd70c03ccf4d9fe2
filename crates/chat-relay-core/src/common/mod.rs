pub mod client_builder;
pub mod sanitize_error;

pub use client_builder::build_http_client;
pub use sanitize_error::sanitize_upstream_error;
