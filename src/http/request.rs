//! Request metadata extraction.
//!
//! Pulls the values the access log needs out of a request without consuming
//! it: client address, host, query parameters and the correlation ID.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query},
    http::{header, HeaderMap, Request, Uri},
};

/// Header carrying the original client address when behind a proxy.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Header carrying a caller-supplied correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client address: `X-Forwarded-For` verbatim if present (even when
/// empty), else the peer.
///
/// The peer is only known when the server was started with connect info;
/// requests driven straight into the router have none.
pub fn client_ip<B>(req: &Request<B>) -> Option<String> {
    req.headers()
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
}

/// Host the request was addressed to, without any port suffix.
pub fn host<B>(req: &Request<B>) -> Option<String> {
    header_str(req.headers(), header::HOST.as_str())
        .or_else(|| req.uri().authority().map(|a| a.as_str()))
        .map(strip_port)
        .map(str::to_string)
}

/// Caller-supplied correlation ID, if any.
pub fn request_id(headers: &HeaderMap) -> Option<String> {
    header_str(headers, X_REQUEST_ID).map(str::to_string)
}

/// Query parameters as a flat map. The first value wins for repeated keys.
pub fn query_params(uri: &Uri) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    if let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(uri) {
        for (key, value) in pairs {
            params.entry(key).or_insert(value);
        }
    }
    params
}

/// Strip a trailing `:port`, keeping bracketed IPv6 literals intact.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    host.split(':').next().unwrap_or(host)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}
