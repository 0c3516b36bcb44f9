// Server loop module
// Accepts connections until shutdown, then drains in-flight connections

use std::future::Future;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::Instant;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept connections until `shutdown` resolves.
///
/// The listener is closed as soon as shutdown begins; connections already
/// being served get up to `performance.shutdown_timeout` seconds to finish.
pub async fn start_server_loop<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }
            () = &mut shutdown => break,
        }
    }

    drop(listener);
    drain_connections(&state).await;
}

/// Wait for active connections to finish, bounded by the shutdown timeout
async fn drain_connections(state: &AppState) {
    let deadline = Instant::now() + Duration::from_secs(state.config.performance.shutdown_timeout);

    loop {
        let active = state.active_connections.load(Ordering::SeqCst);
        if active == 0 {
            return;
        }
        if Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown timeout reached with {active} connection(s) still open"
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
