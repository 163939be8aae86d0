use std::collections::BTreeMap;

use ct_codecs::{Base64, Decoder};

use super::dto::EventMessageValue;
use crate::model::PathParams;
use crate::model::headers::{FSPIOP_DESTINATION, FSPIOP_SOURCE, FspiopHeaders};
use crate::model::participant::ParticipantId;
use crate::provider::http_client::Method;
use crate::service::error::ServiceError;
use crate::service::forward::dto::ForwardRequest;

const BASE64_MARKER: &str = ";base64,";

/// Readdresses the envelope from the hub to `pisp_id`, for the configured
/// transaction request.
pub(super) fn rewrite_envelope(
    value: &mut EventMessageValue,
    hub_name: &ParticipantId,
    pisp_id: &ParticipantId,
    transaction_request_id: &str,
) {
    value.from = hub_name.to_string();
    value.to = pisp_id.to_string();
    value.id = transaction_request_id.to_owned();

    let mut headers = std::mem::take(&mut value.content.headers)
        .into_iter()
        .map(|(name, header)| (name.to_ascii_lowercase(), header))
        .collect::<BTreeMap<_, _>>();
    headers.insert(FSPIOP_SOURCE.to_owned(), hub_name.to_string());
    headers.insert(FSPIOP_DESTINATION.to_owned(), pisp_id.to_string());
    value.content.headers = headers;
}

pub(super) fn decode_payload(
    payload: &serde_json::Value,
) -> Result<serde_json::Value, ServiceError> {
    let serde_json::Value::String(encoded) = payload else {
        return Ok(payload.clone());
    };

    match encoded.split_once(BASE64_MARKER) {
        Some((media_type, data)) if media_type.starts_with("data:") => {
            let decoded = Base64::decode_to_vec(data, None)
                .map_err(|error| ServiceError::Payload(error.to_string()))?;
            Ok(serde_json::from_slice(&decoded)?)
        }
        _ => Ok(serde_json::from_str(encoded)?),
    }
}

/// Callback request for an already rewritten envelope.
pub(super) fn callback_request(value: EventMessageValue) -> Result<ForwardRequest, ServiceError> {
    let payload = decode_payload(&value.content.payload)?;
    let headers = FspiopHeaders::try_from(value.content.headers)?;

    Ok(ForwardRequest {
        method: Method::Put,
        headers,
        path_params: PathParams::from([("ID".to_owned(), value.id)]),
        payload: Some(payload),
    })
}
