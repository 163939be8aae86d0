use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::core_config::ErrorHandlingConfig;
use crate::model::participant::ParticipantId;
use crate::provider::endpoint_resolver::EndpointResolver;
use crate::provider::http_client::HttpClient;

pub mod dto;
pub mod resource;
pub mod service;


#[derive(Clone)]
pub struct ForwardService {
    endpoint_resolver: Arc<dyn EndpointResolver>,
    http_client: Arc<dyn HttpClient>,
    hub_name: ParticipantId,
    error_handling: ErrorHandlingConfig,
    service_providers: BTreeMap<String, Vec<ParticipantId>>,
}

impl ForwardService {
    pub fn new(
        endpoint_resolver: Arc<dyn EndpointResolver>,
        http_client: Arc<dyn HttpClient>,
        hub_name: ParticipantId,
        error_handling: ErrorHandlingConfig,
        service_providers: BTreeMap<String, Vec<ParticipantId>>,
    ) -> Self {
        Self {
            endpoint_resolver,
            http_client,
            hub_name,
            error_handling,
            service_providers,
        }
    }
}
