//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: the security header middleware
//! wraps a dispatcher that picks the email proxy, static files or a 501.

use crate::config::{AppState, ProxyConfig};
use crate::handler::{email, static_files};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for static file serving
pub struct RequestContext<'a> {
    /// Raw (still percent-encoded) request path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_modified_since: Option<&'a str>,
    pub has_if_none_match: bool,
}

impl<'a> RequestContext<'a> {
    pub fn from_parts(parts: &'a Parts) -> Self {
        let headers = &parts.headers;
        Self {
            path: parts.uri.path(),
            query: parts.uri.query(),
            is_head: parts.method == Method::HEAD,
            if_modified_since: headers
                .get("if-modified-since")
                .and_then(|v| v.to_str().ok()),
            has_if_none_match: headers.contains_key("if-none-match"),
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let response = dispatch(req, &state).await;
    Ok(http::apply_security_headers(response))
}

/// True for a POST whose request target is exactly the proxy path.
/// A query string makes it a different target.
pub fn is_email_route<B>(req: &Request<B>, proxy: &ProxyConfig) -> bool {
    req.method() == Method::POST
        && req
            .uri()
            .path_and_query()
            .is_some_and(|target| target.as_str() == proxy.path)
}

async fn dispatch<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    if is_email_route(&req, &state.config.proxy) {
        return email::handle_email_request(req, state).await;
    }

    if matches!(*req.method(), Method::GET | Method::HEAD) {
        // GET/HEAD bodies are ignored
        let (parts, _body) = req.into_parts();
        let ctx = RequestContext::from_parts(&parts);
        return static_files::serve(&ctx, &state.root, &state.config.files).await;
    }

    logger::log_warning(&format!(
        "Unsupported method: {} {}",
        req.method(),
        req.uri().path()
    ));
    http::build_501_response(req.method())
}
