//! Per-request access log on top of [`TraceLayer`](tower_http::trace::TraceLayer).
//!
//! The span carries the request side of a combined log line (client
//! address, method, target, protocol, referer, user agent); the response
//! event adds status, size and latency.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::HttpBody;
use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, HeaderName, Request, Response, header};
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Span;

/// Span maker and response hook for the access log.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessLog;

impl<B> MakeSpan<B> for AccessLog {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        // Only present when served with `into_make_service_with_connect_info`.
        let remote_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string());
        let headers = request.headers();

        tracing::info_span!(
            "request",
            remote_addr = remote_addr.as_deref().unwrap_or("-"),
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            referer = header_or_dash(headers, &header::REFERER),
            user_agent = header_or_dash(headers, &header::USER_AGENT),
        )
    }
}

impl<B: HttpBody> OnResponse<B> for AccessLog {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        // `content-length` is only set by hyper after this layer, so take the
        // size from the body itself; streamed bodies have none.
        let bytes = response
            .body()
            .size_hint()
            .exact()
            .map_or_else(|| "-".to_string(), |len| len.to_string());

        tracing::info!(
            status = response.status().as_u16(),
            bytes = %bytes,
            latency = ?latency,
            "served"
        );
    }
}

fn header_or_dash<'a>(headers: &'a HeaderMap, name: &HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_dash_when_header_missing() {
        let headers = HeaderMap::new();
        assert_eq!(header_or_dash(&headers, &header::USER_AGENT), "-");
    }

    #[test]
    fn should_read_present_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, "curl/8.5.0".parse().unwrap());
        assert_eq!(header_or_dash(&headers, &header::USER_AGENT), "curl/8.5.0");
    }
}
