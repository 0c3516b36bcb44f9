//! Proxy failure reasons
//!
//! Every variant ends in the same client-facing 500 payload. The variants only
//! exist so the operator log can tell the causes apart.

use hyper::StatusCode;
use std::error::Error as StdError;
use std::fmt::Write;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("missing Content-Length header")]
    MissingContentLength,

    #[error("invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),

    #[error("request body too large: {size} bytes (max: {max})")]
    BodyTooLarge { size: u64, max: u64 },

    #[error("request body ended after {received} of {expected} bytes")]
    BodyLengthMismatch { expected: u64, received: u64 },

    #[error("failed to read request body")]
    RequestBody(#[source] Box<dyn StdError + Send + Sync>),

    #[error("failed to build upstream request")]
    BuildRequest(#[from] hyper::http::Error),

    #[error("upstream request failed")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("upstream answered {0}")]
    UpstreamStatus(StatusCode),

    #[error("failed to read upstream response body")]
    ResponseBody(#[source] hyper::Error),

    #[error("upstream did not answer within {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl ProxyError {
    /// Render the error together with its source chain for the operator log
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let _ = write!(message, ": {cause}");
            source = cause.source();
        }
        message
    }
}
