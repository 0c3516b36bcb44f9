//! HTTP protocol layer module
//!
//! Response builders, header policy and content negotiation helpers shared by
//! the static file responder and the email proxy.

pub mod cache;
pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use headers::{apply_security_headers, SECURITY_HEADERS};
pub use response::{
    build_301_response, build_304_response, build_404_response, build_501_response,
    build_file_response, build_html_response, build_json_response,
};
