//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory tagging every request with the listener that accepted it.
#[derive(Debug, Clone, Copy)]
pub struct ListenerSpan {
    listener: &'static str,
}

impl<B> MakeSpan<B> for ListenerSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            listener = self.listener,
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Creates a tracing middleware for one listener.
///
/// # Logging Behavior
///
/// **On Request:** an `INFO` event inside a span carrying the listener label,
/// HTTP method and URI path, emitted before the handler runs.
///
/// **On Response:** an `INFO` event with status code and latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{listener="pubsrv" method=GET path=/gh}: started processing request
/// INFO request{listener="pubsrv" method=GET path=/gh}: finished processing request latency=0 ms status=302
/// ```
pub fn layer(
    listener: &'static str,
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, ListenerSpan> {
    TraceLayer::new_for_http()
        .make_span_with(ListenerSpan { listener })
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
