use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use cuttlefish_api::{BackendClient, Endpoint, QueryRequest, QueryResponse, RequestError};
use serde_json::{Value, json};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test backend");
    });
    format!("http://{addr}")
}

fn multi_agent_body() -> Value {
    json!({
        "answer": "Increase the heap.\nRestart Eclipse.",
        "context": [
            {"score": 0.91, "payload": {"key": "JBIDE-1", "title": "OOM on startup"}},
            {"score": 0.42, "payload": {"description": "no key or title"}}
        ],
        "metadata": {
            "agent_used": "BM25Agent",
            "processing_time": 1.2345,
            "query_type": "troubleshooting",
            "user_flags": {"user_can_wait": true, "production_incident": false}
        }
    })
}

#[tokio::test]
async fn multi_agent_request_body_is_sent_verbatim() {
    let seen = Arc::new(Mutex::new(None::<String>));
    let captured = Arc::clone(&seen);
    let router = Router::new().route(
        "/multiagent-rag",
        post(move |body: String| {
            let captured = Arc::clone(&captured);
            async move {
                *captured.lock().unwrap() = Some(body);
                Json(multi_agent_body())
            }
        }),
    );
    let base_url = serve(router).await;
    let client = BackendClient::new(base_url).unwrap();

    let request =
        QueryRequest::multi_agent("How do I fix OutOfMemoryError in Eclipse?", true, false);
    let response = client.submit(Endpoint::MultiAgent, &request).await.unwrap();

    assert_eq!(
        seen.lock().unwrap().as_deref(),
        Some(
            r#"{"query":"How do I fix OutOfMemoryError in Eclipse?","user_can_wait":true,"production_incident":false}"#
        )
    );
    let QueryResponse::MultiAgent { context, metadata, .. } = response else {
        panic!("expected multi-agent response");
    };
    assert_eq!(context.len(), 2);
    assert_eq!(metadata.agent_used.as_deref(), Some("BM25Agent"));
}

#[tokio::test]
async fn similar_and_rag_routes_resolve_to_their_variants() {
    let router = Router::new()
        .route(
            "/similar",
            post(|| async {
                Json(json!({"results": [{"id": 3, "score": 0.8421374, "payload": {"key": "SPR-9"}}]}))
            }),
        )
        .route(
            "/rag",
            post(|| async { Json(json!({"answer": "Use a newer driver.", "context": []})) }),
        );
    let base_url = serve(router).await;
    let client = BackendClient::new(base_url).unwrap();
    let request = QueryRequest::search("driver crash", "sk-test");

    let similar = client.submit(Endpoint::Similar, &request).await.unwrap();
    assert_eq!(similar.kind(), "similarity");
    assert_eq!(similar.matches()[0].score, Some(0.8421374));

    let rag = client.submit(Endpoint::Rag, &request).await.unwrap();
    assert_eq!(rag.kind(), "rag");
}

#[tokio::test]
async fn backend_detail_is_surfaced_verbatim() {
    let router = Router::new().route(
        "/multiagent-rag",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "index unavailable"})),
            )
        }),
    );
    let client = BackendClient::new(serve(router).await).unwrap();
    let request = QueryRequest::multi_agent("anything", false, false);

    let err = client.submit(Endpoint::MultiAgent, &request).await.unwrap_err();
    assert!(matches!(err, RequestError::Backend { status: 500, .. }));
    assert_eq!(err.user_message(), "index unavailable");
}

#[tokio::test]
async fn empty_error_body_uses_fallback() {
    let router = Router::new()
        .route("/multiagent-rag", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/rag", post(|| async { StatusCode::BAD_GATEWAY }));
    let client = BackendClient::new(serve(router).await).unwrap();

    let err = client
        .submit(Endpoint::MultiAgent, &QueryRequest::multi_agent("q", true, true))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Request failed");

    let err = client
        .submit(Endpoint::Rag, &QueryRequest::search("q", "sk"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Unknown error");
}

#[tokio::test]
async fn non_json_success_is_a_decode_error() {
    let router = Router::new().route("/similar", post(|| async { "<html>gateway</html>" }));
    let client = BackendClient::new(serve(router).await).unwrap();

    let err = client
        .submit(Endpoint::Similar, &QueryRequest::search("q", "sk"))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
    assert_eq!(err.user_message(), "Request failed");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BackendClient::new(format!("http://{addr}")).unwrap();
    let err = client
        .submit(Endpoint::MultiAgent, &QueryRequest::multi_agent("q", true, false))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Network(_)));
    assert_eq!(err.user_message(), "Request failed");
}
