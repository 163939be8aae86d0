use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use thirdparty_core::ThirdpartyCore;
use thirdparty_core::model::PathParams;
use thirdparty_core::model::error_information::ErrorInformationObject;
use thirdparty_core::model::headers::FspiopHeaders;
use thirdparty_core::model::protocol_error::ProtocolError;
use thirdparty_core::provider::http_client::Method;
use thirdparty_core::provider::span::tracing_span::TracingSpan;
use thirdparty_core::provider::span::{AuditAction, AuditMessage, Span, SpanStatus, Tags};
use thirdparty_core::service::error::ServiceError;
use thirdparty_core::service::forward::dto::{ForwardErrorRequest, ForwardRequest};
use thirdparty_core::service::forward::resource::Resource;

use crate::dto::error::ErrorResponseRestDTO;
use crate::router::AppState;

const SERVICE_NAME: &str = "thirdparty-server";

/// Work handed to the background task of a route.
pub(crate) enum Forward {
    Request(&'static Resource, ForwardRequest),
    Services(ForwardRequest),
    Error(&'static Resource, ForwardErrorRequest),
}

impl Forward {
    fn event_type(&self) -> &'static str {
        match self {
            Forward::Request(resource, _) | Forward::Error(resource, _) => resource.event_type,
            Forward::Services(_) => "service",
        }
    }

    fn method(&self) -> Method {
        match self {
            Forward::Request(_, request) | Forward::Services(request) => request.method,
            Forward::Error(..) => Method::Put,
        }
    }

    fn audit_message(&self) -> AuditMessage {
        match self {
            Forward::Request(_, request) | Forward::Services(request) => AuditMessage {
                headers: request.headers.as_map().clone(),
                payload: request.payload.clone(),
            },
            Forward::Error(_, request) => AuditMessage {
                headers: request.headers.as_map().clone(),
                payload: serde_json::to_value(&request.error).ok(),
            },
        }
    }

    /// Status returned to the caller before the forward completes.
    fn ack(&self) -> StatusCode {
        match self {
            Forward::Error(..) => StatusCode::OK,
            _ => match self.method() {
                Method::Get | Method::Post => StatusCode::ACCEPTED,
                Method::Put | Method::Patch => StatusCode::OK,
            },
        }
    }

    async fn run(self, core: &ThirdpartyCore, span: Arc<dyn Span>) -> Result<(), ServiceError> {
        let service = &core.forward_service;
        match self {
            Forward::Request(resource, request) => {
                service.forward(resource, request, Some(span)).await
            }
            Forward::Services(request) => {
                service.forward_services_request(request, Some(span)).await
            }
            Forward::Error(resource, request) => {
                service.forward_error(resource, request, Some(span)).await
            }
        }
    }
}

pub(crate) fn fspiop_headers(headers: &HeaderMap) -> Result<FspiopHeaders, ErrorResponseRestDTO> {
    let headers = headers.iter().filter_map(|(name, value)| {
        value
            .to_str()
            .ok()
            .map(|value| (name.as_str().to_owned(), value.to_owned()))
    });

    Ok(FspiopHeaders::from_inbound(headers)?)
}

pub(crate) fn forward_request(
    method: Method,
    headers: &HeaderMap,
    path_params: PathParams,
    payload: Option<serde_json::Value>,
) -> Result<ForwardRequest, ErrorResponseRestDTO> {
    Ok(ForwardRequest {
        method,
        headers: fspiop_headers(headers)?,
        path_params,
        payload,
    })
}

pub(crate) fn error_request(
    headers: &HeaderMap,
    path_params: PathParams,
    error: ErrorInformationObject,
) -> Result<ForwardErrorRequest, ErrorResponseRestDTO> {
    Ok(ForwardErrorRequest {
        headers: fspiop_headers(headers)?,
        path_params,
        error,
    })
}

pub(crate) fn id_params(id: String) -> PathParams {
    PathParams::from([("ID".to_owned(), id)])
}

/// Starts the forward in the background and returns the acknowledgement
/// status right away. The outcome reaches the participants only through
/// callbacks, so a failure is only logged here.
pub(crate) fn dispatch(state: &AppState, forward: Forward) -> StatusCode {
    let ack = forward.ack();

    let span: Arc<dyn Span> = TracingSpan::root(SERVICE_NAME);
    span.set_tags(&Tags::from([
        ("eventType".to_owned(), forward.event_type().to_owned()),
        (
            "eventAction".to_owned(),
            forward.method().event_action().to_owned(),
        ),
    ]));
    span.audit(&forward.audit_message(), AuditAction::Ingress);

    let core = state.core.clone();
    tokio::spawn(async move {
        let event_type = forward.event_type();
        match forward.run(&core, span.clone()).await {
            Ok(()) => span.finish(SpanStatus::Success),
            Err(error) => {
                let error = ProtocolError::from(error);
                tracing::error!(
                    event_type,
                    error_code = error.code.code(),
                    %error,
                    "Background forward failed"
                );
                span.error(&error);
                span.finish(SpanStatus::Error);
            }
        }
    });

    ack
}
