use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use thirdparty_core::config::core_config::ErrorHandlingConfig;
use thirdparty_core::model::error_information::ErrorInformationObject;
use thirdparty_core::model::headers::HeaderError;
use thirdparty_core::model::protocol_error::{ErrorCode, ProtocolError};
use thirdparty_core::service::error::{ServiceError, canonicalize};

/// Synchronous rejection of an inbound request, in the same `errorInformation`
/// shape used for error callbacks.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ErrorResponseRestDTO(pub ErrorInformationObject);

impl From<ProtocolError> for ErrorResponseRestDTO {
    fn from(error: ProtocolError) -> Self {
        Self(error.to_api_error(&ErrorHandlingConfig::default()))
    }
}

impl From<HeaderError> for ErrorResponseRestDTO {
    fn from(error: HeaderError) -> Self {
        canonicalize(ServiceError::Header(error)).into()
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! gen_from_rejection {
    ($from:ty, $rejection:ty ) => {
        impl From<$from> for $rejection {
            fn from(value: $from) -> Self {
                ProtocolError::new(ErrorCode::GenericValidationError, value.body_text()).into()
            }
        }
    };
}

gen_from_rejection!(JsonRejection, ErrorResponseRestDTO);
gen_from_rejection!(PathRejection, ErrorResponseRestDTO);
