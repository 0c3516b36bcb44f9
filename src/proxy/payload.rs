//! Client payload extraction
//!
//! The payload is treated as opaque bytes: only its declared length is checked.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_LENGTH;
use hyper::{HeaderMap, Request};

use super::ProxyError;

/// Parse the `Content-Length` header the payload size is taken from
pub fn content_length(headers: &HeaderMap) -> Result<u64, ProxyError> {
    let value = headers
        .get(CONTENT_LENGTH)
        .ok_or(ProxyError::MissingContentLength)?;
    let text = value.to_str().map_err(|_| {
        ProxyError::InvalidContentLength(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })?;
    text.trim()
        .parse::<u64>()
        .map_err(|_| ProxyError::InvalidContentLength(text.to_string()))
}

/// Read exactly `Content-Length` bytes from the request body
pub async fn read_payload<B>(req: Request<B>, max_body_size: u64) -> Result<Bytes, ProxyError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let expected = content_length(req.headers())?;
    if expected > max_body_size {
        return Err(ProxyError::BodyTooLarge {
            size: expected,
            max: max_body_size,
        });
    }
    let expected_len = usize::try_from(expected).map_err(|_| ProxyError::BodyTooLarge {
        size: expected,
        max: max_body_size,
    })?;

    let body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| ProxyError::RequestBody(e.into()))?
        .to_bytes();

    if body.len() < expected_len {
        return Err(ProxyError::BodyLengthMismatch {
            expected,
            received: body.len() as u64,
        });
    }

    Ok(body.slice(..expected_len))
}
