//! Cross-cutting HTTP layers: CORS and request logging.

use std::time::Duration;

use axum::http::{Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, MakeSpan, OnResponse, TraceLayer,
};
use tracing::Span;

/// Opens one INFO span per request carrying its method and path.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Logs the response status and latency inside the request span.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
            "request processed"
        );
    }
}

/// Concrete type of [`trace_layer`].
pub type RequestTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RequestSpan,
    DefaultOnRequest,
    LogResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    (),
>;

/// Request logging layer: method, path, status and duration per request.
///
/// Server errors are logged once, by [`ApiError`](crate::error::ApiError)
/// as it renders, so the layer's own failure hook is off.
pub fn trace_layer() -> RequestTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(LogResponse)
        .on_failure(())
}

/// Permissive CORS. Every `OPTIONS` request is answered here with 200 and
/// never reaches a handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::Router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tower::ServiceExt;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::error::ApiError;

    #[derive(Debug, Clone, Default)]
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    async fn failing() -> Result<(), ApiError> {
        Err(ApiError::Storage("connection refused".to_string()))
    }

    #[tokio::test]
    async fn server_error_is_logged_once() {
        let counter = ErrorCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = Router::new()
            .route("/fail", get(failing))
            .layer(trace_layer());
        let Ok(request) = Request::builder().uri("/fail").body(Body::empty()) else {
            panic!("bad request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router failed");
        };

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
