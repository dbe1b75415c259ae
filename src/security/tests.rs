// Security header evaluation tests.

use std::net::TcpListener;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::*;
use crate::error_handling::ErrorType;

fn test_evaluator(timeout: Duration) -> HeaderEvaluator {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client");
    HeaderEvaluator::with_client(client)
}

fn add_header(headers: &mut HeaderMap, name: &str, value: &str) {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .unwrap_or_else(|_| panic!("Invalid header name in test: {}", name));
    let header_value = HeaderValue::from_str(value)
        .unwrap_or_else(|_| panic!("Invalid header value in test: {}", value));
    headers.append(header_name, header_value);
}

#[test]
fn test_classify_all_headers_present() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "X-Frame-Options", "SAMEORIGIN");
    add_header(&mut headers, "X-Content-Type-Options", "nosniff");
    add_header(&mut headers, "Strict-Transport-Security", "max-age=31536000");
    add_header(&mut headers, "Content-Security-Policy", "default-src 'self'");
    add_header(&mut headers, "Referrer-Policy", "strict-origin-when-cross-origin");
    add_header(&mut headers, "Permissions-Policy", "geolocation=(), microphone=()");
    add_header(&mut headers, "Server", "nginx/1.25.3");

    let report = classify("http://example.com", &headers);
    assert_eq!(report.present_count(), 7);
    assert!(report.missing().is_empty());
    assert_eq!(
        report.get("Content-Security-Policy").unwrap().value.as_deref(),
        Some("default-src 'self'")
    );
    assert_eq!(
        report.get("Server").unwrap().value.as_deref(),
        Some("nginx/1.25.3")
    );
}

#[test]
fn test_classify_missing_headers() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "Content-Type", "text/html");

    let report = classify("http://example.com", &headers);
    for result in report.iter() {
        assert!(!result.present, "{} should be missing", result.name);
        assert_eq!(result.value, None);
        assert_eq!(result.status(), "Missing");
    }
}

#[test]
fn test_classify_server_absent_is_missing() {
    // The informational row gets no special treatment
    let headers = HeaderMap::new();
    let report = classify("http://example.com", &headers);
    let server = report.get("Server").unwrap();
    assert!(!server.present);
    assert!(server.value.is_none());
}

#[test]
fn test_classify_name_case_insensitive_value_case_preserved() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "x-frame-options", "DENY");
    add_header(&mut headers, "REFERRER-POLICY", "No-Referrer");

    let report = classify("http://example.com", &headers);
    assert_eq!(
        report.get("X-Frame-Options").unwrap().value.as_deref(),
        Some("DENY")
    );
    assert_eq!(
        report.get("referrer-policy").unwrap().value.as_deref(),
        Some("No-Referrer")
    );
}

#[test]
fn test_classify_empty_value_is_present() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "X-Frame-Options", "");

    let report = classify("http://example.com", &headers);
    let xfo = report.get("X-Frame-Options").unwrap();
    assert!(xfo.present);
    assert_eq!(xfo.value.as_deref(), Some(""));
}

#[test]
fn test_classify_repeated_header_values_joined() {
    let mut headers = HeaderMap::new();
    add_header(&mut headers, "Content-Security-Policy", "default-src 'self'");
    add_header(&mut headers, "Content-Security-Policy", "img-src *");

    let report = classify("http://example.com", &headers);
    assert_eq!(
        report.get("Content-Security-Policy").unwrap().value.as_deref(),
        Some("default-src 'self', img-src *")
    );
}

#[test]
fn test_classify_preserves_checklist_order() {
    let mut headers = HeaderMap::new();
    // Inserted in reverse order on purpose
    add_header(&mut headers, "Server", "Apache");
    add_header(&mut headers, "Permissions-Policy", "camera=()");
    add_header(&mut headers, "X-Frame-Options", "DENY");

    let report = classify("http://example.com", &headers);
    let names: Vec<&str> = report.iter().map(|r| r.name).collect();
    let expected: Vec<&str> = CHECKLIST.iter().map(|e| e.name).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_evaluate_reports_present_and_missing_headers() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(
                status_code(200)
                    .insert_header("X-Frame-Options", "DENY")
                    .insert_header("Strict-Transport-Security", "max-age=63072000; includeSubDomains")
                    .insert_header("Server", "TestServer/2.1")
                    .body("ok"),
            ),
    );

    let evaluator = test_evaluator(Duration::from_secs(5));
    let url = server.url("/").to_string();
    let (report, summary) = evaluator
        .evaluate_with_response(&url)
        .await
        .expect("scan should succeed");

    assert_eq!(report.url, url);
    assert_eq!(summary.status, 200);
    assert!(summary
        .headers
        .iter()
        .any(|(name, value)| name == "server" && value == "TestServer/2.1"));

    assert_eq!(
        report.get("X-Frame-Options").unwrap().value.as_deref(),
        Some("DENY")
    );
    assert_eq!(
        report
            .get("Strict-Transport-Security")
            .unwrap()
            .value
            .as_deref(),
        Some("max-age=63072000; includeSubDomains")
    );
    assert_eq!(
        report.missing(),
        vec![
            "X-Content-Type-Options",
            "Content-Security-Policy",
            "Referrer-Policy",
            "Permissions-Policy",
        ]
    );
}

#[tokio::test]
async fn test_evaluate_adds_http_scheme() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/landing"))
            .respond_with(status_code(200)),
    );

    let evaluator = test_evaluator(Duration::from_secs(5));
    let input = format!("{}/landing", server.addr());
    let report = evaluator.evaluate(&input).await.expect("scan should succeed");

    assert_eq!(report.url, format!("http://{}/landing", server.addr()));
}

#[tokio::test]
async fn test_evaluate_404_is_status_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404).insert_header("X-Frame-Options", "DENY")),
    );

    let evaluator = test_evaluator(Duration::from_secs(5));
    let result = evaluator
        .evaluate(&server.url("/missing").to_string())
        .await;

    match result {
        Err(ScanError::HttpStatus { status, .. }) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_evaluate_500_is_status_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(503)),
    );

    let evaluator = test_evaluator(Duration::from_secs(5));
    let err = evaluator
        .evaluate(&server.url("/").to_string())
        .await
        .unwrap_err();
    assert_eq!(err.error_type(), ErrorType::HttpRequestStatusError);
}

#[tokio::test]
async fn test_evaluate_unresponsive_server_times_out() {
    // The kernel completes the handshake but nobody ever answers
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let evaluator = test_evaluator(Duration::from_millis(250));
    let started = std::time::Instant::now();
    let result = evaluator.evaluate(&format!("http://{addr}/")).await;

    match result {
        Err(ScanError::Connection { kind, .. }) => {
            assert_eq!(kind, ErrorType::HttpRequestTimeoutError)
        }
        other => panic!("expected Connection error, got {other:?}"),
    }
    assert!(started.elapsed() >= Duration::from_millis(250));
    drop(listener);
}

#[tokio::test]
async fn test_evaluate_connection_refused() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let evaluator = test_evaluator(Duration::from_secs(5));
    let result = evaluator.evaluate(&format!("127.0.0.1:{port}")).await;

    assert!(matches!(result, Err(ScanError::Connection { .. })));
}

#[tokio::test]
async fn test_evaluate_invalid_url_never_dispatches() {
    let evaluator = test_evaluator(Duration::from_secs(5));
    let result = evaluator.evaluate("ftp://example.com/file").await;
    assert!(matches!(result, Err(ScanError::InvalidUrl { .. })));
}

#[tokio::test]
async fn test_evaluate_is_deterministic() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(2)
            .respond_with(
                status_code(200)
                    .insert_header("X-Content-Type-Options", "nosniff")
                    .insert_header("Referrer-Policy", "no-referrer"),
            ),
    );

    let evaluator = test_evaluator(Duration::from_secs(5));
    let url = server.url("/").to_string();
    let first = evaluator.evaluate(&url).await.expect("first scan");
    let second = evaluator.evaluate(&url).await.expect("second scan");

    assert_eq!(first, second);
}
