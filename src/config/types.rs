// Configuration types module
// Defines all configuration-related data structures and their defaults

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_PROXY_PATH: &str = "/send-order-email";
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5001";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_BODY_SIZE: u64 = 1_048_576; // 1MB

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub files: FilesConfig,
    pub proxy: ProxyConfig,
}

/// Listener and document root
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory static files are served from
    pub root: String,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root: DEFAULT_ROOT.to_string(),
            workers: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common or json)
    pub access_log_format: String,
    /// Log file path (optional, stdout if not set)
    pub log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            access_log: true,
            access_log_format: "combined".to_string(),
            log_file: None,
        }
    }
}

/// Connection handling configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound for a whole connection in seconds, 0 disables it
    pub connection_timeout: u64,
    pub max_connections: Option<u64>,
    /// Seconds to wait for in-flight connections on shutdown
    pub shutdown_timeout: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive: true,
            connection_timeout: 30,
            max_connections: None,
            shutdown_timeout: 5,
        }
    }
}

/// Static file serving configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FilesConfig {
    pub index_files: Vec<String>,
    pub directory_listing: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            directory_listing: true,
        }
    }
}

/// Order email proxy configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProxyConfig {
    /// Request target that is forwarded upstream (POST only)
    pub path: String,
    /// Upstream base URL, e.g. `http://localhost:5001`
    pub upstream_url: String,
    pub upstream_path: String,
    /// Budget for the whole upstream exchange in milliseconds
    pub timeout_ms: u64,
    pub max_body_size: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PROXY_PATH.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_path: DEFAULT_PROXY_PATH.to_string(),
            timeout_ms: DEFAULT_UPSTREAM_TIMEOUT_MS,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
