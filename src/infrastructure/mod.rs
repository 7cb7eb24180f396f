// HTTP transport
pub mod http;
