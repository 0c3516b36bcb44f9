//! Security header middleware
//!
//! Every response leaving the server passes through [`apply_security_headers`],
//! whichever handler produced it.

use hyper::header::{self, HeaderName, HeaderValue};
use hyper::Response;

/// Fixed header set attached to every response
pub static SECURITY_HEADERS: [(HeaderName, &str); 6] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
    (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];

/// Insert the fixed header set, replacing any value a handler already set
pub fn apply_security_headers<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    for (name, value) in &SECURITY_HEADERS {
        headers.insert(name.clone(), HeaderValue::from_static(*value));
    }
    response
}
