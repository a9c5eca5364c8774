//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Method, Request};
use axum::response::Response;
use slash_command_server::observability::MemorySink;
use slash_command_server::{ServerConfig, Shutdown, SlashServer};
use tokio::net::TcpListener;

pub const FORM: &str = "application/x-www-form-urlencoded";

/// A server bound to an ephemeral local port, logging into memory.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub sink: Arc<MemorySink>,
    pub shutdown: Shutdown,
}

/// Start a server on 127.0.0.1 with an OS-assigned port.
pub async fn start_server(config: ServerConfig) -> RunningServer {
    let sink = Arc::new(MemorySink::new());
    let server = SlashServer::with_sink(config, sink.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningServer {
        addr,
        sink,
        shutdown,
    }
}

/// A client that never pools or proxies, so every test talks to its own server.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn get_req(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", FORM)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(resp: Response) -> Bytes {
    to_bytes(resp.into_body(), 1024 * 1024).await.unwrap()
}

pub async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

/// Collects everything a `fmt` subscriber writes, for asserting on handler logs.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a plain-text subscriber for the current thread only.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || logs.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
