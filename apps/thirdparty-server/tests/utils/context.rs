use thirdparty_core::config::core_config::AppConfig;
use thirdparty_server::ServerConfig;
use thirdparty_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_client::Client;
use super::mock_server::MockServer;

pub struct TestContext {
    pub api: Client,
    pub server_mock: MockServer,
    _handle: JoinHandle<()>,
}

pub fn create_config(
    directory_base_url: &str,
    additional_config: Option<&str>,
) -> AppConfig<ServerConfig> {
    let base_config = indoc::formatdoc! {"
        core:
            hubName: Hub
            directoryBaseUrl: {directory_base_url}
        app:
            enableMetrics: true
            enableServerInfo: true
    "};

    AppConfig::from_yaml(std::iter::once(base_config.as_str()).chain(additional_config))
        .unwrap()
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(None).await
    }

    pub async fn new_with_config(additional_config: Option<&str>) -> Self {
        let server_mock = MockServer::new().await;

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = create_config(&server_mock.uri(), additional_config);
        let _handle = tokio::spawn(async move { start_server(listener, config).await });

        Self {
            api: Client::new(base_url),
            server_mock,
            _handle,
        }
    }
}
