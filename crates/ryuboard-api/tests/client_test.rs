#![allow(clippy::unwrap_used)]
// Integration tests for `RyuClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use url::Url;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use ryuboard_api::transport::json_headers;
use ryuboard_api::{Error, ListType, RyuClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RyuClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let client = RyuClient::new(base_url, &TransportConfig::default()).unwrap();
    (server, client)
}

fn no_body(req: &Request) -> bool {
    req.body.is_empty()
}

/// Mount a GET that must be hit exactly once, with no body and the JSON
/// content type.
async fn mount_get(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api{endpoint}")))
        .and(header("content-type", "application/json"))
        .and(no_body)
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// ── GET accessors ───────────────────────────────────────────────────

#[tokio::test]
async fn test_get_alerts_passthrough() {
    let (server, client) = setup().await;
    let body = json!({
        "blacklist": ["00:00:00:00:00:03"],
        "alerts": { "00:00:00:00:00:03": { "pps": 250.4, "dpid": 1 } }
    });
    mount_get(&server, "/alerts", body.clone()).await;

    assert_eq!(client.get_alerts().await.unwrap(), body);
}

#[tokio::test]
async fn test_get_traffic_stats_passthrough() {
    let (server, client) = setup().await;
    let body = json!([
        { "time": "12:00:05", "pps": 14.2 },
        { "time": "12:00:10", "pps": 980.0 }
    ]);
    mount_get(&server, "/traffic-stats", body.clone()).await;

    assert_eq!(client.get_traffic_stats().await.unwrap(), body);
}

#[tokio::test]
async fn test_get_switches_passthrough() {
    let (server, client) = setup().await;
    let body = json!([{ "dpid": "0000000000000001", "ports": [] }]);
    mount_get(&server, "/topology/switches", body.clone()).await;

    assert_eq!(client.get_switches().await.unwrap(), body);
}

#[tokio::test]
async fn test_get_links_passthrough() {
    let (server, client) = setup().await;
    let body = json!([{
        "src": { "dpid": "0000000000000001", "port_no": "00000002" },
        "dst": { "dpid": "0000000000000002", "port_no": "00000001" }
    }]);
    mount_get(&server, "/topology/links", body.clone()).await;

    assert_eq!(client.get_links().await.unwrap(), body);
}

#[tokio::test]
async fn test_get_hosts_passthrough() {
    let (server, client) = setup().await;
    let body = json!([{ "mac": "00:00:00:00:00:01", "ipv4": ["10.0.0.1"], "ipv6": [] }]);
    mount_get(&server, "/topology/hosts", body.clone()).await;

    assert_eq!(client.get_hosts().await.unwrap(), body);
}

#[tokio::test]
async fn test_get_lists_passthrough() {
    let (server, client) = setup().await;
    let body = json!({ "blacklist": ["00:00:00:00:00:04"], "whitelist": [] });
    mount_get(&server, "/lists", body.clone()).await;

    assert_eq!(client.get_lists().await.unwrap(), body);
}

// ── List mutations ──────────────────────────────────────────────────

#[tokio::test]
async fn test_add_to_list_sends_exact_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/lists/add"))
        .and(header("content-type", "application/json"))
        .and(body_string(
            r#"{"type":"blacklist","mac":"AA:BB:CC:DD:EE:FF"}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "AA:BB:CC:DD:EE:FF added to blacklist."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .add_to_list(ListType::Blacklist, "AA:BB:CC:DD:EE:FF")
        .await
        .unwrap();
    assert_eq!(resp["status"], "success");
}

#[tokio::test]
async fn test_remove_from_list_sends_exact_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/lists/remove"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "type": "whitelist", "mac": "11:22:33:44:55:66" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "11:22:33:44:55:66 removed from whitelist."
        })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .remove_from_list(ListType::Whitelist, "11:22:33:44:55:66")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_error_reply_is_not_translated() {
    let (server, client) = setup().await;
    let body = json!({ "status": "error", "message": "MAC not found in the specified list." });

    Mock::given(method("POST"))
        .and(path("/api/lists/remove"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let resp = client
        .remove_from_list(ListType::Blacklist, "de:ad:be:ef:00:00")
        .await
        .unwrap();
    assert_eq!(resp, body);
}

// ── Concurrency ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_concurrent_calls_resolve_independently() {
    let (server, client) = setup().await;
    let switches = json!([{ "dpid": "0000000000000001" }]);
    mount_get(&server, "/topology/switches", switches.clone()).await;

    Mock::given(method("GET"))
        .and(path("/api/topology/links"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let (sw, links) = tokio::join!(client.get_switches(), client.get_links());

    assert_eq!(sw.unwrap(), switches);
    assert!(matches!(links, Err(Error::Status { status: 503, .. })));
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_fails_without_retry() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_alerts().await.unwrap_err();
    match err {
        Error::Status { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        ref other => panic!("expected Status error, got: {other:?}"),
    }
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_malformed_json_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/traffic-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.get_traffic_stats().await;
    assert!(
        matches!(result, Err(Error::Deserialization { ref body, .. }) if body == "<html>oops</html>"),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_controller_is_transport_error() {
    let base_url = Url::parse("http://127.0.0.1:1/api").unwrap();
    let client = RyuClient::new(base_url, &TransportConfig::default()).unwrap();

    let err = client.get_lists().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert!(err.is_connect());
}

#[tokio::test]
async fn test_error_status_survives_truncated_body() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        let _ = sock.read(&mut buf).await.unwrap();
        // Promise 64 bytes, send 7, hang up.
        sock.write_all(
            b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 64\r\n\r\npartial",
        )
        .await
        .unwrap();
    });

    let base_url = Url::parse(&format!("http://{addr}/api")).unwrap();
    let client = RyuClient::new(base_url, &TransportConfig::default()).unwrap();

    let err = client.get_alerts().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 500, .. }), "got: {err:?}");
}

// ── Timeouts ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_configured_timeout_fails_slow_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "blacklist": [], "alerts": {} }))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = TransportConfig {
        timeout: Some(Duration::from_millis(200)),
        ..TransportConfig::default()
    };
    let base_url = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let client = RyuClient::new(base_url, &transport).unwrap();

    let err = client.get_alerts().await.unwrap_err();
    assert!(err.is_timeout(), "got: {err:?}");
    assert!(!err.is_connect());
}

#[tokio::test]
async fn test_with_client_uses_callers_http_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "blacklist": [], "whitelist": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .default_headers(json_headers())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let base_url = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let client = RyuClient::with_client(http, base_url);

    assert!(client.get_lists().await.unwrap_err().is_timeout());
}

// ── Wire headers ────────────────────────────────────────────────────

#[tokio::test]
async fn test_requests_carry_no_agent_or_encoding_headers() {
    let (server, client) = setup().await;
    mount_get(&server, "/alerts", json!({ "blacklist": [], "alerts": {} })).await;
    Mock::given(method("POST"))
        .and(path("/api/lists/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    client.get_alerts().await.unwrap();
    client.add_to_list(ListType::Blacklist, "AA").await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    for req in &received {
        assert_eq!(
            req.headers.get("content-type").unwrap(),
            "application/json",
            "{} {}",
            req.method,
            req.url
        );
        assert!(req.headers.get("user-agent").is_none(), "{} {}", req.method, req.url);
        assert!(req.headers.get("accept-encoding").is_none(), "{} {}", req.method, req.url);
    }
}
