//! HttpTargetClient against an in-process axum target.

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::post,
    Json, Router,
};
use seed_client::{ClientConfig, HttpTargetClient, TargetClient, TransportError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: Method,
    path: String,
    schema: Option<String>,
    body: Value,
}

/// Target that answers every request with the same status and body.
struct Stub {
    status: StatusCode,
    reply: Value,
    requests: Mutex<Vec<CapturedRequest>>,
}

type SharedStub = Arc<Stub>;

async fn respond(
    State(stub): State<SharedStub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let schema = headers
        .get("schema")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    stub.requests.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        schema,
        body,
    });

    (stub.status, Json(stub.reply.clone()))
}

/// Start a target serving `/http` and `/graphql`
async fn start_target(status: StatusCode, reply: Value) -> (String, SharedStub) {
    let stub = Arc::new(Stub {
        status,
        reply,
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/http", post(respond))
        .route("/graphql", post(respond))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

fn client_for(base_url: &str) -> HttpTargetClient {
    HttpTargetClient::new(ClientConfig::new(base_url).with_schema("default")).unwrap()
}

#[tokio::test]
async fn test_submit_posts_record_to_ingest_endpoint() {
    let (base_url, stub) = start_target(StatusCode::OK, json!({"result": "ok"})).await;
    let client = client_for(&base_url);

    let record = json!({"home_id": 7, "name": "Anna Petrov", "phone": "+71234567890"});
    client.submit(&record).await.unwrap();

    let requests = stub.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/http");
    assert_eq!(requests[0].body, record);
}

#[tokio::test]
async fn test_submit_non_success_status_is_fatal() {
    let (base_url, _stub) =
        start_target(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await;
    let client = client_for(&base_url);

    let err = client.submit(&json!({"x": 1})).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, TransportError::Status { ref body, .. } if body.contains("boom")));
}

#[tokio::test]
async fn test_query_sends_schema_header_and_parses_envelope() {
    let envelope = json!({"data": {"Agent": [{"uuid": "a-1"}, {"uuid": "a-2"}]}});
    let (base_url, stub) = start_target(StatusCode::OK, envelope).await;
    let client = client_for(&base_url);

    let response = client.query("{ Agent { uuid } }").await.unwrap();
    assert_eq!(response.data_list("Agent").len(), 2);
    assert!(response.application_errors().is_none());

    let requests = stub.requests.lock().unwrap();
    assert_eq!(requests[0].path, "/graphql");
    assert_eq!(requests[0].schema.as_deref(), Some("default"));
    assert_eq!(requests[0].body, json!({"query": "{ Agent { uuid } }"}));
}

#[tokio::test]
async fn test_query_application_errors_are_not_fatal() {
    let envelope = json!({"data": null, "errors": [{"message": "unknown type Agent"}]});
    let (base_url, _stub) = start_target(StatusCode::OK, envelope).await;
    let client = client_for(&base_url);

    let response = client.query("{ Agent { uuid } }").await.unwrap();
    assert_eq!(response.error_count(), 1);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_query_non_success_status_is_fatal() {
    let (base_url, _stub) = start_target(StatusCode::NOT_FOUND, json!({})).await;
    let client = client_for(&base_url);

    let err = client.query("{ Agent { uuid } }").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let err = client.submit(&json!({})).await.unwrap_err();
    assert!(matches!(err, TransportError::Request { .. }));
}

async fn stall() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(5)).await;
    StatusCode::OK
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let app = Router::new().route("/http", post(stall));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}")).with_timeout(Duration::from_millis(200));
    let client = HttpTargetClient::new(config).unwrap();

    let err = client.submit(&json!({})).await.unwrap_err();
    match err {
        TransportError::Request { source, .. } => assert!(source.is_timeout()),
        other => panic!("Expected timeout, got {other:?}"),
    }
}
