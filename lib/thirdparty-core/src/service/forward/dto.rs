use crate::model::PathParams;
use crate::model::error_information::ErrorInformationObject;
use crate::model::headers::FspiopHeaders;
use crate::provider::http_client::Method;

#[derive(Debug, Clone, PartialEq)]
pub struct ForwardRequest {
    pub method: Method,
    pub headers: FspiopHeaders,
    pub path_params: PathParams,
    /// Dropped for GET.
    pub payload: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForwardErrorRequest {
    /// Already addressed to the party receiving the error.
    pub headers: FspiopHeaders,
    pub path_params: PathParams,
    pub error: ErrorInformationObject,
}
