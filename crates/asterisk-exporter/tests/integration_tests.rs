//! Integration tests for the exporter HTTP surface

use asterisk_exporter::collectors::{AsteriskPoller, CollectorRegistry, SharedExecutor};
use asterisk_exporter::config::{CollectorsConfig, ExporterConfig};
use asterisk_exporter::exposition::CONTENT_TYPE;
use asterisk_exporter::handlers::{create_router, AppState};
use asterisk_parser::MockExecutor;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

const UPTIME: &str = "System uptime: 36520\nLast reload: 12345\n";
const CHANNELS: &str = "12 active channels\n25 active calls\n789 calls processed\n";
const PEERS: &str = "Name/username             Host                                    Dyn Forcerport Comedia    ACL Port     Status      Description\n\
    100/100                   10.0.0.10                                D  Auto (No)  No             5060     OK (15 ms)\n\
    101/101                   (Unspecified)                            D  Auto (No)  No             0        UNKNOWN\n\
    2 sip peers [Monitored: 1 online, 1 offline Unmonitored: 0 online, 0 offline]\n";

/// Create a router whose collectors read from a scripted executor
fn create_test_app(executor: MockExecutor, collectors: CollectorsConfig) -> Router {
    let shared: SharedExecutor = Arc::new(executor);
    let state = AppState {
        poller: Arc::new(AsteriskPoller::with_tracing(shared)),
        registry: Arc::new(CollectorRegistry::from_config("asterisk", &collectors)),
        metrics_path: "/metrics".to_string(),
        limiter: None,
    };
    create_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_scrape_default_collectors() {
    let executor = MockExecutor::new()
        .with_reply("core show uptime seconds", UPTIME)
        .with_reply("core show channels count", CHANNELS)
        .with_reply("sip show peers", PEERS);
    let app = create_test_app(executor.clone(), CollectorsConfig::default());

    let (status, content_type, text) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE));

    assert!(text.contains("# HELP asterisk_core_system_uptime_seconds "));
    assert!(text.contains("asterisk_core_system_uptime_seconds 36520\n"));
    assert!(text.contains("asterisk_core_last_reload_seconds 12345\n"));
    assert!(text.contains("asterisk_core_active_calls 25\n"));
    assert!(text.contains("asterisk_sip_peers 2\n"));
    assert!(text.contains("asterisk_sip_monitored_online 1\n"));
    assert!(text.contains("asterisk_sip_status_qualified 1\n"));
    assert!(text.contains("asterisk_sip_status_unknown 1\n"));

    // agents were not scripted
    assert!(text.contains("asterisk_agents_defined -1\n"));
    assert!(text.contains("asterisk_exporter_collector_error{collector=\"agents\"} 1\n"));

    assert!(executor.calls().contains(&"sip show peers".to_string()));
}

#[tokio::test]
async fn test_each_scrape_runs_commands_again() {
    let executor = MockExecutor::new().with_reply("module show", "7 modules loaded\n");
    let collectors = CollectorsConfig {
        agents: false,
        core: false,
        sip: false,
        module: true,
        ..CollectorsConfig::default()
    };
    let app = create_test_app(executor.clone(), collectors);

    get(app.clone(), "/metrics").await;
    let (_, _, text) = get(app, "/metrics").await;

    assert!(text.contains("asterisk_module_count 7\n"));
    assert_eq!(executor.call_count(), 2);
}

#[tokio::test]
async fn test_busy_scrape_returns_unavailable() {
    let executor = MockExecutor::new().with_reply("module show", "7 modules loaded\n");
    let collectors = CollectorsConfig {
        agents: false,
        core: false,
        sip: false,
        module: true,
        ..CollectorsConfig::default()
    };
    let config = ExporterConfig {
        max_requests: 1,
        ..ExporterConfig::default_test_config()
    };
    let shared: SharedExecutor = Arc::new(executor.clone());
    let mut state = asterisk_exporter::build_state(&config);
    state.poller = Arc::new(AsteriskPoller::with_tracing(shared));
    state.registry = Arc::new(CollectorRegistry::from_config("asterisk", &collectors));

    let limiter = state.limiter.clone().unwrap();
    let held = limiter.clone().try_acquire_owned().unwrap();
    let app = create_router(state);

    let (status, _, body) = get(app.clone(), "/metrics").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("too many concurrent scrapes"));

    // healthy is never limited
    let (status, _, _) = get(app.clone(), "/-/healthy").await;
    assert_eq!(status, StatusCode::OK);

    drop(held);
    let (status, _, text) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("asterisk_module_count 7\n"));
    assert_eq!(limiter.available_permits(), 1);
    assert_eq!(executor.call_count(), 1);
}

#[tokio::test]
async fn test_healthy() {
    let app = create_test_app(MockExecutor::new(), CollectorsConfig::default());

    let (status, _, body) = get(app, "/-/healthy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Healthy");
}

#[tokio::test]
async fn test_landing_page_links_metrics() {
    let app = create_test_app(MockExecutor::new(), CollectorsConfig::default());

    let (status, content_type, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("<a href=\"/metrics\">"));
}

#[tokio::test]
async fn test_unknown_path() {
    let app = create_test_app(MockExecutor::new(), CollectorsConfig::default());

    let (status, _, _) = get(app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_state_from_config_uses_custom_metrics_path() {
    let config = ExporterConfig {
        metrics_path: "/stats".to_string(),
        ..ExporterConfig::default_test_config()
    };
    let app = create_router(asterisk_exporter::build_state(&config));

    let (status, _, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<a href=\"/stats\">"));
}
