//! Liveness reporting.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub message: &'static str,
}

/// `GET /status`
pub async fn status() -> Json<Liveness> {
    Json(Liveness { message: "alive" })
}
