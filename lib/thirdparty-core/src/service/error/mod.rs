use thiserror::Error;

use crate::model::headers::HeaderError;
use crate::model::protocol_error::{ErrorCode, ProtocolError};
use crate::provider::endpoint_resolver::EndpointResolverError;
use crate::provider::http_client;


#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EndpointResolver(#[from] EndpointResolverError),
    #[error(transparent)]
    HttpClient(#[from] http_client::Error),
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error("Missing resource id `{0}`")]
    MissingResourceId(&'static str),
    #[error("Method `{0}` is not supported for this resource")]
    UnsupportedMethod(http_client::Method),
    #[error("Missing configuration `{0}`")]
    MissingConfig(&'static str),
    #[error("Payload decoding error: {0}")]
    Payload(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EndpointResolver(error) => match error {
                EndpointResolverError::EndpointNotFound { .. }
                | EndpointResolverError::InvalidUrl { .. } => ErrorCode::DestinationFspError,
                EndpointResolverError::UnresolvedTemplateParam(_)
                | EndpointResolverError::Directory(_) => ErrorCode::InternalServerError,
            },
            ServiceError::HttpClient(error) => match error {
                http_client::Error::HttpError(_) | http_client::Error::StatusCodeIsError(_) => {
                    ErrorCode::DestinationCommunicationError
                }
                http_client::Error::JsonError(_) | http_client::Error::Other(_) => {
                    ErrorCode::InternalServerError
                }
            },
            ServiceError::Header(_) | ServiceError::MissingResourceId(_) => {
                ErrorCode::MissingElement
            }
            ServiceError::Json(_) | ServiceError::Payload(_) => ErrorCode::GenericValidationError,
            ServiceError::Protocol(error) => error.code,
            ServiceError::UnsupportedMethod(_) | ServiceError::MissingConfig(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}

/// Converts any failure into the canonical [`ProtocolError`].
///
/// Already canonical errors pass through unchanged; everything else keeps
/// its display text as the message and its debug form as the cause.
pub fn canonicalize(error: ServiceError) -> ProtocolError {
    match error {
        ServiceError::Protocol(error) => error,
        error => ProtocolError::new(error.error_code(), error.to_string())
            .with_cause(format!("{error:?}")),
    }
}

impl From<ServiceError> for ProtocolError {
    fn from(value: ServiceError) -> Self {
        canonicalize(value)
    }
}
