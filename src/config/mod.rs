// Configuration module entry point
// Loads configuration from file and environment, holds runtime state

mod state;
mod types;

use hyper::Uri;
use std::net::SocketAddr;
use std::time::Duration;

pub use state::AppState;
pub use types::{
    Config, FilesConfig, LoggingConfig, PerformanceConfig, ProxyConfig, ServerConfig,
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROXY_PATH, DEFAULT_UPSTREAM_URL,
};

/// Environment variable prefix, e.g. `STOREFRONT_SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "STOREFRONT";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (extension optional).
    /// A missing file is not an error; every key has a default.
    pub fn load_from(config_path: &str) -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Full URI the order email payload is posted to
    pub fn upstream_uri(&self) -> Result<Uri, String> {
        let base = self.proxy.upstream_url.trim_end_matches('/');
        let path = &self.proxy.upstream_path;
        let target = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };

        let uri: Uri = target
            .parse()
            .map_err(|e| format!("Invalid upstream URL '{target}': {e}"))?;

        match uri.scheme_str() {
            Some("http") if uri.authority().is_some() => Ok(uri),
            Some("http") => Err(format!("Upstream URL '{target}' has no host")),
            _ => Err(format!(
                "Unsupported upstream URL '{target}': only http:// is supported"
            )),
        }
    }

    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.proxy.timeout_ms)
    }
}
