use std::sync::Arc;

use serde::Deserialize;

use super::{EndpointResolver, EndpointResolverError, render_url};
use crate::model::PathParams;
use crate::model::endpoint_type::EndpointType;
use crate::model::participant::ParticipantId;
use crate::provider::http_client::{Headers, HttpClient, Method};

/// Looks up callback URLs in the central participant directory.
pub struct DirectoryEndpointResolver {
    base_url: String,
    client: Arc<dyn HttpClient>,
}

#[derive(Debug, Deserialize)]
struct DirectoryEndpointDTO {
    #[serde(rename = "type")]
    r#type: String,
    value: String,
}

impl DirectoryEndpointResolver {
    pub fn new(base_url: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn fetch_endpoints(
        &self,
        participant: &ParticipantId,
    ) -> Result<Vec<DirectoryEndpointDTO>, EndpointResolverError> {
        let url = format!(
            "{}/participants/{participant}/endpoints",
            self.base_url.trim_end_matches('/')
        );
        let headers = Headers::from([("accept".to_owned(), "application/json".to_owned())]);

        let endpoints = self
            .client
            .send(&url, None, Some(headers), Method::Get)
            .await?
            .error_for_status()?
            .json()?;

        Ok(endpoints)
    }
}

#[async_trait::async_trait]
impl EndpointResolver for DirectoryEndpointResolver {
    #[tracing::instrument(level = "debug", skip(self, path_params), err(Display))]
    async fn resolve(
        &self,
        participant: &ParticipantId,
        endpoint_type: EndpointType,
        path_template: &str,
        path_params: &PathParams,
    ) -> Result<String, EndpointResolverError> {
        let endpoints = self.fetch_endpoints(participant).await?;

        let endpoint = endpoints
            .into_iter()
            .find(|endpoint| endpoint.r#type == endpoint_type.as_ref())
            .ok_or_else(|| EndpointResolverError::EndpointNotFound {
                participant: participant.to_owned(),
                endpoint_type,
            })?;

        render_url(&endpoint.value, path_template, path_params)
    }
}
