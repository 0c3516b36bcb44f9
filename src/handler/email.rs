//! Order email endpoint
//!
//! Boundary between the proxy and the client: a relayed upstream body on
//! success, the fixed error payload on any failure.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::proxy::{self, ProxyError, UpstreamReply};

/// Body sent to the client whenever the relay fails
pub const SERVICE_UNAVAILABLE_BODY: &str = r#"{"error": "Email service unavailable"}"#;

/// Forward the order payload upstream and translate the outcome
pub async fn handle_email_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match relay(req, state).await {
        Ok(reply) => {
            // Only 200 is ever sent on success, whatever 2xx the upstream used
            if reply.status != StatusCode::OK {
                logger::log_warning(&format!(
                    "Upstream answered {} for order email, relaying as 200 OK",
                    reply.status
                ));
            }
            http::build_json_response(StatusCode::OK, reply.body)
        }
        Err(err) => {
            logger::log_error(&format!("Email proxy error: {}", err.report()));
            http::build_json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(SERVICE_UNAVAILABLE_BODY.as_bytes()),
            )
        }
    }
}

async fn relay<B>(req: Request<B>, state: &AppState) -> Result<UpstreamReply, ProxyError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let payload = proxy::read_payload(req, state.config.proxy.max_body_size).await?;
    state.email_proxy.forward(payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn unreachable_state() -> AppState {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = Config::default();
        config.proxy.upstream_url = format!("http://{addr}");
        config.proxy.timeout_ms = 2_000;
        AppState::new(config).unwrap()
    }

    async fn assert_fixed_error(response: Response<Full<Bytes>>) {
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, SERVICE_UNAVAILABLE_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_yields_fixed_error() {
        let state = unreachable_state();
        let req = Request::post("/send-order-email")
            .header("content-length", "2")
            .body(Full::new(Bytes::from_static(b"{}")))
            .unwrap();
        assert_fixed_error(handle_email_request(req, &state).await).await;
    }

    #[tokio::test]
    async fn test_missing_content_length_yields_fixed_error() {
        let state = unreachable_state();
        let req = Request::post("/send-order-email")
            .body(Full::new(Bytes::from_static(b"{}")))
            .unwrap();
        assert_fixed_error(handle_email_request(req, &state).await).await;
    }

    #[test]
    fn test_error_body_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(SERVICE_UNAVAILABLE_BODY).unwrap();
        assert_eq!(value["error"], "Email service unavailable");
    }
}
