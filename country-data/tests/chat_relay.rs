//! Chat widget flow against an in-process stub of the relay endpoint.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};

use country_data::{ChatSession, RelayClient, Sender, chat::FALLBACK_REPLY};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn successful_relay_reply_becomes_a_bot_turn() {
    let router = Router::new().route(
        "/chat",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["prompt"], json!("capital of France"));
            Json(json!({ "response": "Paris" }))
        }),
    );
    let relay = RelayClient::new(&spawn(router).await, Some(5)).unwrap();

    let mut session = ChatSession::new();
    assert!(session.send("capital of France", &relay).await);

    let turns: Vec<_> = session.transcript().turns().collect();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].sender, Sender::User);
    assert_eq!(turns[0].text, "capital of France");
    assert_eq!(turns[1].sender, Sender::Bot);
    assert_eq!(turns[1].text, "Paris");
}

#[tokio::test]
async fn relay_failure_appends_the_fixed_fallback_reply() {
    let router = Router::new().route(
        "/chat",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "provider failure" })),
            )
        }),
    );
    let relay = RelayClient::new(&spawn(router).await, Some(5)).unwrap();

    let mut session = ChatSession::new();
    assert!(session.send("capital of France", &relay).await);

    let turns: Vec<_> = session.transcript().turns().collect();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].sender, Sender::Bot);
    assert_eq!(turns[1].text, FALLBACK_REPLY);
}

#[tokio::test]
async fn blank_input_is_ignored_without_a_relay_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let router = Router::new().route(
        "/chat",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "response": "unreachable" }))
            }
        }),
    );
    let relay = RelayClient::new(&spawn(router).await, Some(5)).unwrap();

    let mut session = ChatSession::new();
    assert!(!session.send("   ", &relay).await);

    assert!(session.transcript().is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn garbled_relay_body_also_falls_back() {
    let router = Router::new().route(
        "/chat",
        post(|| async { Json(json!({ "unexpected": true })) }),
    );
    let relay = RelayClient::new(&spawn(router).await, Some(5)).unwrap();

    let mut session = ChatSession::new();
    session.send("hello", &relay).await;

    let turns: Vec<_> = session.transcript().turns().collect();
    assert_eq!(turns[1].text, FALLBACK_REPLY);
}
