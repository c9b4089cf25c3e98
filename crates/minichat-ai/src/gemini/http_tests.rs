//! `GeminiProvider`/`GeminiChat` against a local HTTP server.

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::client::GeminiProvider;
use super::config::GeminiConfig;
use crate::{AiError, ApiKey, ChatHandle, ChatProvider, FaultKind, Turn};

const MODEL_OK: &str = r#"{"name":"models/gemini-2.0-flash"}"#;

fn reply_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

/// Serve one canned response per connection, in order. The join handle
/// yields the raw requests that were received.
async fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/v1beta", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().await.unwrap();
            seen.push(read_request(&mut stream).await);
            let response = format!(
                "HTTP/1.1 {status} Canned\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        }
        seen
    });

    (base, handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + body_len {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Talks to the local server directly, whatever proxy the environment sets.
fn provider(base: &str) -> GeminiProvider {
    GeminiProvider {
        config: Arc::new(GeminiConfig::new("gemini-2.0-flash").with_api_base(base)),
        http: reqwest::Client::builder().no_proxy().build().unwrap(),
    }
}

#[tokio::test]
async fn send_message_round_trip() {
    let (base, server) = serve(vec![
        (200, MODEL_OK.to_string()),
        (200, reply_body("sa mi!")),
    ])
    .await;

    let seed = vec![Turn::user("hi"), Turn::assistant("hello")];
    let mut chat = provider(&base)
        .start_chat(&ApiKey::new("good-key"), "You teach Mini.", &seed)
        .await
        .unwrap();
    let reply = chat.send_message("greet me in Mini").await.unwrap();

    assert_eq!(reply, "sa mi!");
    assert_eq!(
        chat.context(),
        &[
            Turn::user("hi"),
            Turn::assistant("hello"),
            Turn::user("greet me in Mini"),
            Turn::assistant("sa mi!"),
        ]
    );

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].starts_with("GET /v1beta/models/gemini-2.0-flash "));
    assert!(requests[0].to_lowercase().contains("x-goog-api-key: good-key"));
    assert!(requests[1].starts_with("POST /v1beta/models/gemini-2.0-flash:generateContent "));
    assert!(requests[1].contains("greet me in Mini"));
    assert!(requests[1].contains("You teach Mini."));
}

#[tokio::test]
async fn failed_send_keeps_user_turn() {
    let (base, server) = serve(vec![
        (200, MODEL_OK.to_string()),
        (
            500,
            r#"{"error":{"code":500,"message":"Internal error encountered.","status":"INTERNAL"}}"#
                .to_string(),
        ),
    ])
    .await;

    let mut chat = provider(&base)
        .start_chat(&ApiKey::new("good-key"), "You teach Mini.", &[])
        .await
        .unwrap();
    let err = chat.send_message("hello").await.unwrap_err();

    assert_eq!(err.kind(), FaultKind::Unknown);
    assert_eq!(chat.context(), &[Turn::user("hello")]);
    server.await.unwrap();
}

#[tokio::test]
async fn rejected_key_fails_start_chat() {
    let (base, server) = serve(vec![(
        400,
        r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#
            .to_string(),
    )])
    .await;

    let result = provider(&base)
        .start_chat(&ApiKey::new("bad-key"), "You teach Mini.", &[])
        .await;

    assert!(matches!(result, Err(AiError::Auth(ref m)) if m.contains("API key not valid")));
    assert_eq!(server.await.unwrap().len(), 1);
}

#[tokio::test]
async fn quota_error_on_send() {
    let (base, server) = serve(vec![
        (200, MODEL_OK.to_string()),
        (
            429,
            r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        ),
    ])
    .await;

    let mut chat = provider(&base)
        .start_chat(&ApiKey::new("good-key"), "", &[])
        .await
        .unwrap();
    let err = chat.send_message("hello").await.unwrap_err();

    assert!(matches!(err, AiError::Quota(_)));
    assert!(!err.invalidates_handle());
    server.await.unwrap();
}
