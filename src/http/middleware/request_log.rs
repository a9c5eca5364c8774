//! Access logging middleware.
//!
//! Wraps every request. The pre-hook stamps the request with its start time;
//! the post-hook renders one [`AccessRecord`] per finished request and hands
//! it to the configured [`LogSink`]. The response passes through unchanged.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::config::LoggingConfig;
use crate::http::request;
use crate::observability::{AccessRecord, LogSink};

/// State shared by every invocation of the access log middleware.
#[derive(Clone)]
pub struct RequestLogState {
    sink: Arc<dyn LogSink>,
    icon_path: Arc<str>,
    static_prefix: Arc<str>,
}

impl RequestLogState {
    pub fn new(sink: Arc<dyn LogSink>, config: &LoggingConfig) -> Self {
        Self {
            sink,
            icon_path: config.icon_path.as_str().into(),
            static_prefix: config.static_prefix.as_str().into(),
        }
    }

    /// Paths that are noise and never logged.
    pub fn is_excluded(&self, path: &str) -> bool {
        path == &*self.icon_path || path.starts_with(&*self.static_prefix)
    }
}

/// Request-scoped start time, inserted by [`start_timer`].
#[derive(Debug, Clone, Copy)]
pub struct RequestStart(pub Instant);

/// What the post-hook needs from the request, captured before the request
/// is handed to the router and consumed.
#[derive(Debug)]
pub struct RequestMeta {
    started: Instant,
    method: Method,
    path: String,
    ip: Option<String>,
    host: Option<String>,
    params: BTreeMap<String, String>,
    request_id: Option<String>,
}

impl RequestMeta {
    fn capture(req: &Request) -> Self {
        Self {
            started: req
                .extensions()
                .get::<RequestStart>()
                .map_or_else(Instant::now, |start| start.0),
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            ip: request::client_ip(req),
            host: request::host(req),
            params: request::query_params(req.uri()),
            request_id: request::request_id(req.headers()),
        }
    }
}

/// Pre-hook: record when handling started.
pub fn start_timer(req: &mut Request) {
    req.extensions_mut().insert(RequestStart(Instant::now()));
}

/// Post-hook: emit the access log line for a finished request.
pub async fn log_request(state: &RequestLogState, meta: RequestMeta, response: Response) -> Response {
    let (parts, body) = response.into_parts();

    let (response, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (None, bytes),
        Err(err) => {
            tracing::warn!(path = %meta.path, error = %err, "Failed to buffer response body");
            (Some(StatusCode::INTERNAL_SERVER_ERROR.into_response()), Bytes::new())
        }
    };

    let status = response.as_ref().map_or(parts.status, |r| r.status());

    let record = AccessRecord {
        method: meta.method.to_string(),
        path: meta.path,
        status: status.as_u16(),
        duration: meta.started.elapsed(),
        time: Utc::now(),
        ip: meta.ip,
        host: meta.host,
        params: meta.params,
        response: String::from_utf8_lossy(&body).into_owned(),
        request_id: meta.request_id,
    };
    state.sink.emit(&record.to_string());

    response.unwrap_or_else(|| Response::from_parts(parts, Body::from(body)))
}

/// The middleware itself, for `axum::middleware::from_fn_with_state`.
pub async fn request_log(
    State(state): State<RequestLogState>,
    mut req: Request,
    next: Next,
) -> Response {
    start_timer(&mut req);

    if state.is_excluded(req.uri().path()) {
        return next.run(req).await;
    }

    let meta = RequestMeta::capture(&req);
    let response = next.run(req).await;
    log_request(&state, meta, response).await
}
