use std::{net::SocketAddr, time::Duration};

use axum::{Json, Router, http::StatusCode, routing::post};
use dynamocards_core::{
    AnalyzeVideoRequest, AnalyzerClient, ClientConfig, ConceptRecord, Deck, DynamocardsError,
};
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpSocket};

async fn spawn_backend(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

/// A port that is bound but never listening, so connects are refused. The
/// socket must stay alive for as long as the port has to stay taken.
fn refusing_port() -> (SocketAddr, TcpSocket) {
    let socket = TcpSocket::new_v4().expect("socket");
    socket
        .bind("127.0.0.1:0".parse().expect("addr"))
        .expect("bind");
    (socket.local_addr().expect("addr"), socket)
}

fn client_for(addr: SocketAddr) -> AnalyzerClient {
    AnalyzerClient::new(&ClientConfig::with_base_url(format!("http://{addr}"))).expect("client")
}

fn request(link: &str) -> AnalyzeVideoRequest {
    AnalyzeVideoRequest::new(link)
}

fn echo_link_backend() -> Router {
    Router::new().route(
        "/analyze_video",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "key_concepts": [
                    { "link": body["youtube_link"] },
                    { "fields": body.as_object().map_or(0, |fields| fields.len()) },
                ]
            }))
        }),
    )
}

#[tokio::test]
async fn posts_link_and_flattens_key_concepts() {
    let app = Router::new().route(
        "/analyze_video",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "key_concepts": [
                    { "link": body["youtube_link"] },
                    { "b": "2", "c": "3" },
                ]
            }))
        }),
    );
    let client = client_for(spawn_backend(app).await);

    let cards = client.fetch_concepts(&request("https://youtu.be/dQw4w9WgXcQ")).await;

    assert_eq!(
        cards,
        vec![
            ConceptRecord::new("link", "https://youtu.be/dQw4w9WgXcQ"),
            ConceptRecord::new("b", "2"),
            ConceptRecord::new("c", "3"),
        ]
    );
}

#[tokio::test]
async fn non_success_status_is_reported_and_yields_no_cards() {
    let app = Router::new().route(
        "/analyze_video",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "invalid youtube_link") }),
    );
    let client = client_for(spawn_backend(app).await);

    let err = client.analyze_video(&request("not a link")).await.expect_err("should fail");
    match err {
        DynamocardsError::Status { status, body } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body, "invalid youtube_link");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(client.fetch_concepts(&request("not a link")).await.is_empty());
}

#[tokio::test]
async fn malformed_body_yields_no_cards() {
    let app = Router::new().route("/analyze_video", post(|| async { "key_concepts: none" }));
    let client = client_for(spawn_backend(app).await);

    let err = client.analyze_video(&request("https://youtu.be/x")).await.expect_err("should fail");
    assert!(matches!(err, DynamocardsError::Json(_)));
    assert!(client.fetch_concepts(&request("https://youtu.be/x")).await.is_empty());
}

#[tokio::test]
async fn response_without_key_concepts_yields_no_cards() {
    let app = Router::new().route(
        "/analyze_video",
        post(|| async { Json(json!({ "result": [{ "page_content": "..." }] })) }),
    );
    let client = client_for(spawn_backend(app).await);

    assert!(client.fetch_concepts(&request("https://youtu.be/x")).await.is_empty());
}

#[tokio::test]
async fn deck_request_reaches_backend_verbatim() {
    let client = client_for(spawn_backend(echo_link_backend()).await);
    let mut deck = Deck::new();
    deck.on_link_change("  https://youtu.be/abc?t=42 ");

    let cards = client.fetch_concepts(&deck.request()).await;

    assert_eq!(
        cards,
        vec![
            ConceptRecord::new("link", "  https://youtu.be/abc?t=42 "),
            ConceptRecord::new("fields", "1"),
        ]
    );
}

#[tokio::test]
async fn refused_connection_empties_deck() {
    let (addr, _reserved) = refusing_port();
    let config = ClientConfig {
        base_url: format!("http://{addr}"),
        timeout: Duration::from_secs(5),
    };
    let client = AnalyzerClient::new(&config).expect("client");

    let err = client
        .analyze_video(&request("https://youtu.be/x"))
        .await
        .expect_err("should fail");
    assert!(matches!(err, DynamocardsError::Transport(_)));

    let mut deck = Deck::new();
    deck.on_loaded(vec![ConceptRecord::new("stale", "card")]);
    deck.on_link_change("https://youtu.be/x");

    deck.on_submit(&client).await;

    assert!(deck.is_empty());
    assert_eq!(deck.link(), "https://youtu.be/x");
}

#[tokio::test]
async fn deck_submit_replaces_previous_cards() {
    let app = Router::new().route(
        "/analyze_video",
        post(|| async { Json(json!({ "key_concepts": [{ "ownership": "one owner per value" }] })) }),
    );
    let client = client_for(spawn_backend(app).await);
    let mut deck = Deck::new();
    deck.on_loaded(vec![ConceptRecord::new("stale", "card")]);

    deck.on_submit(&client).await;

    assert_eq!(deck.cards(), [ConceptRecord::new("ownership", "one owner per value")]);
}
