use std::collections::BTreeMap;
use std::sync::Arc;

use super::{EndpointResolver, EndpointResolverError, render_url};
use crate::model::PathParams;
use crate::model::endpoint_type::EndpointType;
use crate::model::participant::ParticipantId;

pub type EndpointOverrides = BTreeMap<ParticipantId, BTreeMap<EndpointType, String>>;

/// Serves locally configured callback URLs and delegates everything else.
pub struct ConfiguredEndpointResolver {
    overrides: EndpointOverrides,
    inner: Arc<dyn EndpointResolver>,
}

impl ConfiguredEndpointResolver {
    pub fn new(overrides: EndpointOverrides, inner: Arc<dyn EndpointResolver>) -> Self {
        Self { overrides, inner }
    }
}

#[async_trait::async_trait]
impl EndpointResolver for ConfiguredEndpointResolver {
    async fn resolve(
        &self,
        participant: &ParticipantId,
        endpoint_type: EndpointType,
        path_template: &str,
        path_params: &PathParams,
    ) -> Result<String, EndpointResolverError> {
        match self
            .overrides
            .get(participant)
            .and_then(|endpoints| endpoints.get(&endpoint_type))
        {
            Some(base_url) => {
                tracing::debug!(%participant, %endpoint_type, "Using configured endpoint override");
                render_url(base_url, path_template, path_params)
            }
            None => {
                self.inner
                    .resolve(participant, endpoint_type, path_template, path_params)
                    .await
            }
        }
    }
}
