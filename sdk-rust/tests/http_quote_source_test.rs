use axum::{
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use quote_sdk::{
    http::{HttpQuoteSource, HttpQuoteSourceOptions, DEFAULT_ENDPOINT},
    QuoteError, QuoteErrorKind, QuoteRecord, QuoteSource,
};
use serde_json::json;
use std::{collections::HashMap, time::Duration};
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

fn source_for(endpoint: String) -> HttpQuoteSource {
    HttpQuoteSource::new(HttpQuoteSourceOptions {
        endpoint: Some(endpoint),
        ..Default::default()
    })
}

#[tokio::test]
async fn fetch_decodes_quote_from_endpoint() {
    let endpoint = serve(Router::new().route(
        "/",
        get(|| async {
            Json(json!({
                "id": "42",
                "quote": "Why did the chicken...",
                "status": 200
            }))
        }),
    ))
    .await;

    let record = source_for(endpoint).fetch().await.unwrap();

    assert_eq!(record, QuoteRecord::new("42", "Why did the chicken...", 200));
}

#[tokio::test]
async fn fetch_sends_accept_json_and_custom_headers() {
    let endpoint = serve(Router::new().route(
        "/",
        get(|headers: HeaderMap| async move {
            let accept = headers
                .get(header::ACCEPT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let client = headers
                .get("x-client")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({ "id": client, "quote": accept, "status": 0 }))
        }),
    ))
    .await;

    let source = HttpQuoteSource::new(HttpQuoteSourceOptions {
        endpoint: Some(endpoint),
        headers: Some(HashMap::from([
            ("x-client".to_string(), "quotes-test".to_string()),
            ("accept".to_string(), "text/html".to_string()),
        ])),
        ..Default::default()
    });

    let record = source.fetch().await.unwrap();

    assert_eq!(record.text(), "application/json");
    assert_eq!(record.id(), "quotes-test");
}

#[tokio::test]
async fn non_success_status_is_a_network_error() {
    let endpoint = serve(Router::new().route(
        "/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try again later").into_response() }),
    ))
    .await;

    let err = source_for(endpoint).fetch().await.unwrap_err();

    match &err {
        QuoteError::StatusCode(status, body) => {
            assert_eq!(*status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "try again later");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert_eq!(err.kind(), QuoteErrorKind::Network);
}

#[tokio::test]
async fn not_found_is_a_network_error() {
    let endpoint = serve(Router::new().route("/other", get(|| async { "nothing here" }))).await;

    let err = source_for(endpoint).fetch().await.unwrap_err();

    match err {
        QuoteError::StatusCode(status, _) => assert_eq!(status, reqwest::StatusCode::NOT_FOUND),
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let endpoint = serve(Router::new().route(
        "/",
        get(|| async { Json(json!({ "id": "42", "status": "200" })) }),
    ))
    .await;

    let err = source_for(endpoint).fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Decode(_)));
    assert_eq!(err.kind(), QuoteErrorKind::Decode);
}

#[tokio::test]
async fn array_body_is_a_decode_error() {
    let endpoint = serve(Router::new().route(
        "/",
        get(|| async { Json(json!(["42", "Why did the chicken...", 200])) }),
    ))
    .await;

    let err = source_for(endpoint).fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Decode(_)));
}

#[tokio::test]
async fn html_body_is_a_decode_error() {
    let endpoint = serve(Router::new().route(
        "/",
        get(|| async { "<html><body>forismatic</body></html>" }),
    ))
    .await;

    let err = source_for(endpoint).fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Decode(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source_for(format!("http://{addr}/"))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteError::Transport(_)));
    assert_eq!(err.kind(), QuoteErrorKind::Network);
}

#[tokio::test]
async fn slow_endpoint_times_out_as_transport_error() {
    let endpoint = serve(Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "id": "late", "quote": "too late", "status": 200 }))
        }),
    ))
    .await;

    let source = HttpQuoteSource::new(HttpQuoteSourceOptions {
        endpoint: Some(endpoint),
        timeout: Some(Duration::from_millis(100)),
        ..Default::default()
    });

    let err = source.fetch().await.unwrap_err();

    match err {
        QuoteError::Transport(error) => assert!(error.is_timeout()),
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_header_name_is_invalid_input() {
    let source = HttpQuoteSource::new(HttpQuoteSourceOptions {
        endpoint: Some("http://127.0.0.1:9/".to_string()),
        headers: Some(HashMap::from([(
            "bad header".to_string(),
            "value".to_string(),
        )])),
        ..Default::default()
    });

    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::InvalidInput(_)));
}

#[test]
fn default_source_points_at_default_endpoint() {
    let source = HttpQuoteSource::default();

    assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(source.provider(), "http");
}
