//! Logger module
//!
//! Provides logging utilities for the storefront server including:
//! - Server lifecycle logging (startup banner, shutdown)
//! - Access logging in combined, common or json format
//! - Error and warning logging
//!
//! Everything is emitted through `tracing`; [`init`] installs the subscriber.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, LoggingConfig};
use hyper::Uri;
use std::net::SocketAddr;

/// Target used for access log lines so they can be filtered separately
pub const ACCESS_TARGET: &str = "storefront::access";

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(&config.level, config.log_file.as_deref())
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, upstream: &Uri) {
    tracing::info!("Privacy-focused e-commerce server running at http://{addr}");
    tracing::info!("Press Ctrl+C to stop the server");
    tracing::info!(
        root = %config.server.root,
        upstream = %upstream,
        proxy_path = %config.proxy.path,
        timeout_ms = config.proxy.timeout_ms,
        "Serving static files and proxying order emails"
    );
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if let Some(ref path) = config.logging.log_file {
        tracing::info!("Log file: {path}");
    }
}

pub fn log_server_stopped() {
    tracing::info!("Server stopped.");
}

pub fn log_shutdown_requested(signal: &str) {
    tracing::info!("{signal} received, shutting down");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!("Connection accepted from {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}
