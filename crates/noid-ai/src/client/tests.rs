use serde_json::json;

use super::*;
use crate::test_support::{dead_endpoint, spawn_endpoint, Canned};
use crate::transcript::Part;

fn hello() -> Vec<Turn> {
    vec![Turn::user(vec![Part::text("hello")])]
}

#[test]
fn error_detail_prefers_detail_field() {
    assert_eq!(error_detail(500, r#"{"detail":"overloaded"}"#), "overloaded");
}

#[test]
fn error_detail_falls_back_to_status() {
    assert_eq!(error_detail(502, "<html>bad gateway</html>"), "HTTP 502");
    assert_eq!(error_detail(500, r#"{"message":"nope"}"#), "HTTP 500");
    assert_eq!(error_detail(500, r#"{"detail":""}"#), "HTTP 500");
    assert_eq!(error_detail(500, r#"{"detail":null}"#), "HTTP 500");
    assert_eq!(error_detail(404, ""), "HTTP 404");
}

#[test]
fn error_detail_passes_structured_detail_through() {
    let detail = error_detail(422, r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#);
    assert!(detail.contains("field required"));
}

#[test]
fn parse_reply_reads_text() {
    let reply = parse_reply(r#"{"text":"hi there"}"#).unwrap();
    assert_eq!(reply, CompletionReply::text("hi there"));
}

#[test]
fn parse_reply_treats_missing_or_empty_text_as_no_reply() {
    assert_eq!(parse_reply("{}").unwrap(), CompletionReply::empty());
    assert_eq!(parse_reply(r#"{"text":null}"#).unwrap(), CompletionReply::empty());
    assert_eq!(parse_reply(r#"{"text":""}"#).unwrap(), CompletionReply::empty());
    assert_eq!(parse_reply(r#"{"text":42}"#).unwrap(), CompletionReply::empty());
}

#[test]
fn parse_reply_rejects_non_json() {
    let err = parse_reply("definitely not json").unwrap_err();
    assert!(matches!(err, ChatError::Parse(_)));
}

#[tokio::test]
async fn posts_full_transcript_as_contents() {
    let endpoint = spawn_endpoint(vec![Canned::json(200, json!({ "text": "hi" }))]).await;
    let client = HttpCompletionClient::new(&endpoint.url).unwrap();

    let turns = vec![
        Turn::user(vec![Part::text("one")]),
        Turn::model("two"),
        Turn::user(vec![Part::text("three"), Part::inline("image/png", "AAAA")]),
    ];
    let reply = client.complete(&turns).await.unwrap();

    assert_eq!(reply.text.as_deref(), Some("hi"));
    let requests = endpoint.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], json!({ "contents": turns }));
}

#[tokio::test]
async fn non_success_status_maps_to_remote_service_error() {
    let endpoint =
        spawn_endpoint(vec![Canned::json(503, json!({ "detail": "overloaded" }))]).await;
    let client = HttpCompletionClient::new(&endpoint.url).unwrap();

    let err = client.complete(&hello()).await.unwrap_err();
    assert_eq!(err, ChatError::RemoteService("overloaded".into()));
}

#[tokio::test]
async fn non_success_without_detail_uses_status() {
    let endpoint = spawn_endpoint(vec![Canned::raw(500, "Internal Server Error")]).await;
    let client = HttpCompletionClient::new(&endpoint.url).unwrap();

    let err = client.complete(&hello()).await.unwrap_err();
    assert_eq!(err, ChatError::RemoteService("HTTP 500".into()));
}

#[tokio::test]
async fn malformed_success_body_is_parse_error() {
    let endpoint = spawn_endpoint(vec![Canned::raw(200, "<html></html>")]).await;
    let client = HttpCompletionClient::new(&endpoint.url).unwrap();

    let err = client.complete(&hello()).await.unwrap_err();
    assert!(matches!(err, ChatError::Parse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let client = HttpCompletionClient::new(dead_endpoint().await).unwrap();

    let err = client.complete(&hello()).await.unwrap_err();
    assert!(matches!(err, ChatError::Network(_)));
}

#[tokio::test]
async fn arc_client_delegates() {
    let endpoint = spawn_endpoint(vec![Canned::json(200, json!({ "text": "ok" }))]).await;
    let client = Arc::new(HttpCompletionClient::new(&endpoint.url).unwrap());

    let reply = client.complete(&hello()).await.unwrap();
    assert_eq!(reply.text.as_deref(), Some("ok"));
}
