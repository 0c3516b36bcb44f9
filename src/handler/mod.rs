//! Request handler module
//!
//! Request routing dispatch plus the two request handlers: static files and
//! the order email proxy endpoint.

pub mod email;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
