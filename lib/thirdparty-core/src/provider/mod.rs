pub mod endpoint_resolver;
pub mod http_client;
pub mod span;
