//! Order email proxy module
//!
//! Reads the client payload, forwards it to the upstream email service and
//! reports the outcome as a `Result` the request handler maps to a response.

mod error;
mod payload;
mod upstream;

pub use error::ProxyError;
pub use payload::{content_length, read_payload};
pub use upstream::{EmailProxy, UpstreamReply};
