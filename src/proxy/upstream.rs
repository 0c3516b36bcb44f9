//! Upstream email service client
//!
//! One POST per order, no retries and no idle connection reuse.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Request, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;

use super::ProxyError;
use crate::config::Config;

/// Successful upstream exchange
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Forwards order payloads to the email service
#[derive(Clone)]
pub struct EmailProxy {
    client: Client<HttpConnector, Full<Bytes>>,
    upstream: Uri,
    timeout: Duration,
}

impl EmailProxy {
    pub fn new(upstream: Uri, timeout: Duration) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(timeout));

        let client = Client::builder(TokioExecutor::new())
            .pool_max_idle_per_host(0)
            .build(connector);

        Self {
            client,
            upstream,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, String> {
        Ok(Self::new(config.upstream_uri()?, config.upstream_timeout()))
    }

    pub const fn upstream(&self) -> &Uri {
        &self.upstream
    }

    /// POST the payload upstream and buffer the reply.
    ///
    /// Fails on transport errors, non-2xx statuses and when the whole exchange
    /// exceeds the configured timeout.
    pub async fn forward(&self, payload: Bytes) -> Result<UpstreamReply, ProxyError> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.upstream.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(Full::new(payload))?;

        tokio::time::timeout(self.timeout, self.exchange(request))
            .await
            .unwrap_or(Err(ProxyError::Timeout(self.timeout)))
    }

    async fn exchange(&self, request: Request<Full<Bytes>>) -> Result<UpstreamReply, ProxyError> {
        let response = self.client.request(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status));
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(ProxyError::ResponseBody)?
            .to_bytes();

        Ok(UpstreamReply { status, body })
    }
}
