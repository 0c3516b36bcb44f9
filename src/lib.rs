//! Static storefront server with an order email relay.
//!
//! Files under the configured root are served for `GET`/`HEAD`; a `POST` to
//! the proxy path is forwarded to the internal email service. Every response
//! carries the same set of security headers.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod proxy;
pub mod server;
