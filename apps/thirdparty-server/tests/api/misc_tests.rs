use serde_json::Value;
use thirdparty_server::router::start_server;

use crate::utils::context::{TestContext, create_config};

#[tokio::test]
async fn test_health_check() {
    let context = TestContext::new().await;

    let resp = context.api.get("/health").await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new().await;

    let resp = context.api.get("/build-info").await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "thirdparty-server");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let context = TestContext::new().await;

    let resp = context.api.get("/metrics").await;

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_technical_endpoints_can_be_disabled() {
    let context = TestContext::new_with_config(Some(indoc::indoc! {"
        app:
            enableServerInfo: false
            enableMetrics: false
    "}))
    .await;

    assert_eq!(context.api.get("/health").await.status(), 404);
    assert_eq!(context.api.get("/metrics").await.status(), 404);
}

#[test]
fn test_default_config_port_matches_fallback() {
    let config: thirdparty_core::config::core_config::AppConfig<thirdparty_server::ServerConfig> =
        thirdparty_core::config::core_config::AppConfig::from_files(&["../../config/config.yml"])
            .unwrap();

    assert_eq!(
        config.app.server_port,
        Some(thirdparty_server::DEFAULT_SERVER_PORT)
    );
}

#[tokio::test]
async fn test_startup_fails_when_event_bus_unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let config = create_config(
        "http://127.0.0.1:1",
        Some(indoc::indoc! {"
            app:
                natsUrl: nats://127.0.0.1:1
        "}),
    );

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        tokio::spawn(start_server(listener, config)),
    )
    .await
    .unwrap();

    assert!(result.unwrap_err().is_panic());
}
