//! Full round trips over a real TCP listener.

use slash_command_server::ServerConfig;

mod common;

#[tokio::test]
async fn status_over_tcp_logs_peer_address() {
    let server = common::start_server(ServerConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/status", server.addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), r#"{"message":"alive"}"#);

    let lines = server.sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" ip=127.0.0.1 host=127.0.0.1 "), "{}", lines[0]);

    server.shutdown.trigger();
}

#[tokio::test]
async fn slash_over_tcp_with_forwarding_headers() {
    let server = common::start_server(ServerConfig::default()).await;

    let res = common::client()
        .post(format!("http://{}/slash", server.addr))
        .header("x-forwarded-for", "198.51.100.4")
        .header("x-request-id", "abc123")
        .form(&[("token", "abc"), ("command", "/weather"), ("text", "94070")])
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = serde_json::from_str(&res.text().await.unwrap()).unwrap();
    assert_eq!(body["attachments"][0]["title"], "Slack API Documentation");

    let lines = server.sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("method=POST path=/slash status=200 "));
    assert!(lines[0].contains(" ip=198.51.100.4 "));
    assert!(lines[0].ends_with(" request_id=abc123"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn missing_token_over_tcp() {
    let server = common::start_server(ServerConfig::default()).await;

    let res = common::client()
        .post(format!("http://{}/slash", server.addr))
        .form(&[("command", "/weather")])
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 400);

    server.shutdown.trigger();
}
