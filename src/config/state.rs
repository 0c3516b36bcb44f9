// Application state module
// Shared, read-only configuration plus the few runtime handles every connection needs

use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;

use super::types::Config;
use crate::proxy::EmailProxy;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Document root as configured (canonicalized per request)
    pub root: PathBuf,
    pub email_proxy: EmailProxy,
    pub active_connections: AtomicUsize,
}

impl AppState {
    /// Build state from configuration, validating the upstream URL
    pub fn new(config: Config) -> Result<Self, String> {
        let email_proxy = EmailProxy::from_config(&config)?;
        let root = PathBuf::from(&config.server.root);

        Ok(Self {
            config,
            root,
            email_proxy,
            active_connections: AtomicUsize::new(0),
        })
    }
}
