use thiserror::Error;

use crate::model::PathParams;
use crate::model::endpoint_type::EndpointType;
use crate::model::participant::ParticipantId;
use crate::provider::http_client;

pub mod configured;
pub mod directory;
mod template;


pub use template::{render_template, render_url};

#[derive(Debug, Error)]
pub enum EndpointResolverError {
    #[error("Cannot find endpoint `{endpoint_type}` for participant `{participant}`")]
    EndpointNotFound {
        participant: ParticipantId,
        endpoint_type: EndpointType,
    },
    #[error("Unresolved template parameter `{0}`")]
    UnresolvedTemplateParam(String),
    #[error("Invalid callback URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Endpoint directory error: {0}")]
    Directory(#[from] http_client::Error),
}

/// Resolves a participant's callback URL and renders the path template onto it.
///
/// Every call is treated as a fresh lookup; implementations may cache
/// internally.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait EndpointResolver: Send + Sync {
    async fn resolve(
        &self,
        participant: &ParticipantId,
        endpoint_type: EndpointType,
        path_template: &str,
        path_params: &PathParams,
    ) -> Result<String, EndpointResolverError>;
}
