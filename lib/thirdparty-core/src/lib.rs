use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::endpoint_resolver::configured::ConfiguredEndpointResolver;
use provider::endpoint_resolver::directory::DirectoryEndpointResolver;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use service::forward::ForwardService;
use service::notification::NotificationService;

pub mod config;
pub mod model;
pub mod provider;
pub mod service;

/// Wired core of the adapter, built once at startup from configuration.
#[derive(Clone)]
pub struct ThirdpartyCore {
    pub forward_service: Arc<ForwardService>,
    pub notification_service: Arc<NotificationService>,
    pub config: Arc<CoreConfig>,
}

impl ThirdpartyCore {
    /// Uses a default reqwest client unless `http_client` is given.
    pub fn new(config: CoreConfig, http_client: Option<Arc<dyn HttpClient>>) -> Self {
        let http_client: Arc<dyn HttpClient> =
            http_client.unwrap_or_else(|| Arc::new(ReqwestClient::default()));

        let directory = Arc::new(DirectoryEndpointResolver::new(
            config.directory_base_url.clone(),
            http_client.clone(),
        ));
        let endpoint_resolver = Arc::new(ConfiguredEndpointResolver::new(
            config.endpoint_overrides.clone(),
            directory,
        ));

        let forward_service = Arc::new(ForwardService::new(
            endpoint_resolver,
            http_client,
            config.hub_name.clone(),
            config.error_handling,
            config.services.providers.clone(),
        ));
        let notification_service = Arc::new(NotificationService::new(
            forward_service.clone(),
            config.hub_name.clone(),
            config.notification.clone(),
        ));

        Self {
            forward_service,
            notification_service,
            config: Arc::new(config),
        }
    }
}
