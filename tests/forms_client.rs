// tests/forms_client.rs
//
// Outcome mapping of the subscription shell clients against a live local
// endpoint: 2xx and non-2xx carry the server's `{ message }` through, an
// absent message falls back to the generic one, and a transport failure
// comes back as the fixed generic message, never an Err.

use axum::{routing::post, Json, Router};
use http::StatusCode;
use serde_json::json;

use polynews_feed::config::AppConfig;
use polynews_feed::forms::{FormsClient, SubscriptionForm, GENERIC_ERROR_MESSAGE};

/// Serve the router on an ephemeral loopback port; returns the base URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn cfg_for(base_url: &str) -> AppConfig {
    AppConfig {
        api_base_url: base_url.to_string(),
        request_timeout_secs: 2,
    }
}

fn filled_form() -> SubscriptionForm {
    SubscriptionForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        feedback: String::new(),
    }
}

fn unreachable_cfg() -> AppConfig {
    // Port 1 on loopback refuses immediately; no retry follows.
    cfg_for("http://127.0.0.1:1")
}

#[tokio::test]
async fn subscribe_carries_server_success_message() {
    let app = Router::new().route(
        "/api/submit",
        post(|| async { Json(json!({ "message": "Thank you for subscribing!" })) }),
    );
    let base = spawn_server(app).await;

    let client = FormsClient::new(&cfg_for(&base)).expect("build client");
    let out = client.subscribe(&filled_form()).await;
    assert!(out.ok);
    assert_eq!(out.message, "Thank you for subscribing!");
}

#[tokio::test]
async fn unsubscribe_carries_server_message_on_non_2xx() {
    let app = Router::new().route(
        "/api/unsubscribe",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Email not found" })),
            )
        }),
    );
    let base = spawn_server(app).await;

    let client = FormsClient::new(&cfg_for(&base)).expect("build client");
    let out = client.unsubscribe("ada@example.com").await;
    assert!(!out.ok);
    assert_eq!(out.message, "Email not found");
}

#[tokio::test]
async fn missing_server_message_falls_back_to_generic() {
    let app = Router::new().route("/api/submit", post(|| async { Json(json!({})) }));
    let base = spawn_server(app).await;

    let client = FormsClient::new(&cfg_for(&base)).expect("build client");
    let out = client.subscribe(&filled_form()).await;
    // 2xx still counts as ok; only the display message degrades.
    assert!(out.ok);
    assert_eq!(out.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn subscribe_transport_failure_yields_generic_message() {
    let client = FormsClient::new(&unreachable_cfg()).expect("build client");
    let form = SubscriptionForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        feedback: String::new(),
    };

    let out = client.subscribe(&form).await;
    assert!(!out.ok);
    assert_eq!(out.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn unsubscribe_transport_failure_yields_generic_message() {
    let client = FormsClient::new(&unreachable_cfg()).expect("build client");

    let out = client.unsubscribe("ada@example.com").await;
    assert!(!out.ok);
    assert_eq!(out.message, GENERIC_ERROR_MESSAGE);
}
