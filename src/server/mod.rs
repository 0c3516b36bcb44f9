// Server module entry
// Binds the listener, runs the accept loop and handles shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is named server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
pub use signal::wait_for_shutdown;

use std::future::Future;
use std::net::SocketAddr;
use hyper::Uri;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::{AppState, Config};

/// Startup failures
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    InvalidAddress(String),

    #[error("{0}")]
    InvalidUpstream(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// A bound server, ready to accept connections
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Validate the configuration and bind the listening socket.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        let addr = config.socket_addr().map_err(ServerError::InvalidAddress)?;
        let state = AppState::new(config).map_err(ServerError::InvalidUpstream)?;
        let listener =
            create_reusable_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self {
            listener,
            state: Arc::new(state),
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn config(&self) -> &Config {
        &self.state.config
    }

    /// Where order emails are relayed to
    pub fn upstream(&self) -> &Uri {
        self.state.email_proxy.upstream()
    }

    /// Serve until `shutdown` resolves and in-flight connections drain
    pub async fn run<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        start_server_loop(self.listener, self.state, shutdown).await;
    }
}
