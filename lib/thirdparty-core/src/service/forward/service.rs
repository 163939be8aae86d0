use std::sync::Arc;

use serde_json::json;

use super::ForwardService;
use super::dto::{ForwardErrorRequest, ForwardRequest};
use super::resource::{Resource, Route, SERVICES};
use crate::model::PathParams;
use crate::model::headers::FspiopHeaders;
use crate::provider::http_client::Method;
use crate::provider::span::{AuditAction, AuditMessage, Span, SpanStatus, Tags};
use crate::service::error::{ServiceError, canonicalize};

impl ForwardService {
    /// Forwards a participant request to the destination's callback endpoint.
    ///
    /// On failure an error callback is sent back to the original source, with
    /// the hub as sender, before the error is returned. If that callback fails
    /// too, its error is returned instead.
    pub async fn forward(
        &self,
        resource: &'static Resource,
        request: ForwardRequest,
        parent_span: Option<Arc<dyn Span>>,
    ) -> Result<(), ServiceError> {
        let error_headers = request.headers.reversed_for_error(&self.hub_name);
        self.forward_with_error_headers(resource, request, error_headers, parent_span)
            .await
    }

    /// Like [`ForwardService::forward`], for requests the hub originates itself.
    /// They are already addressed hub to participant, so an error goes to the
    /// same participant.
    pub async fn forward_from_hub(
        &self,
        resource: &'static Resource,
        request: ForwardRequest,
        parent_span: Option<Arc<dyn Span>>,
    ) -> Result<(), ServiceError> {
        let error_headers = request.headers.clone();
        self.forward_with_error_headers(resource, request, error_headers, parent_span)
            .await
    }

    /// Delivers an `errorInformation` callback. Failures are returned as is and
    /// never trigger another callback.
    pub async fn forward_error(
        &self,
        resource: &'static Resource,
        request: ForwardErrorRequest,
        parent_span: Option<Arc<dyn Span>>,
    ) -> Result<(), ServiceError> {
        let resource_id = request
            .path_params
            .get(resource.path_param)
            .cloned()
            .ok_or(ServiceError::MissingResourceId(resource.path_param))?;
        let payload = serde_json::to_value(&request.error)?;

        let route = Route {
            method: Method::Put,
            path: resource.error_path,
            endpoint_type: resource.error_endpoint_type,
        };

        let span = start_span(
            parent_span.as_deref(),
            resource.error_span_name,
            span_tags(resource, Method::Put, &resource_id),
            &request.headers,
            Some(&payload),
        );

        let result = self
            .send(
                &route,
                &request.headers,
                &request.path_params,
                Some(&payload),
            )
            .await;

        match result {
            Ok(()) => {
                if let Some(span) = &span {
                    span.finish(SpanStatus::Success);
                }
                Ok(())
            }
            Err(error) => {
                let error = canonicalize(error);
                tracing::error!(
                    resource = resource.event_type,
                    %resource_id,
                    error_code = error.code.code(),
                    %error,
                    "Failed to deliver error callback"
                );

                if let Some(span) = &span {
                    span.finish(SpanStatus::Error);
                }
                Err(error.into())
            }
        }
    }

    /// `GET /services/{ServiceType}` is answered locally when providers for the
    /// service type are configured, and forwarded otherwise.
    pub async fn forward_services_request(
        &self,
        request: ForwardRequest,
        parent_span: Option<Arc<dyn Span>>,
    ) -> Result<(), ServiceError> {
        let providers = (request.method == Method::Get)
            .then(|| request.path_params.get(SERVICES.path_param))
            .flatten()
            .and_then(|service_type| self.service_providers.get(service_type));

        let Some(providers) = providers else {
            return self.forward(&SERVICES, request, parent_span).await;
        };

        tracing::debug!(
            service_type = ?request.path_params.get(SERVICES.path_param),
            ?providers,
            "Answering services request from configured providers"
        );

        let response = ForwardRequest {
            method: Method::Put,
            headers: request
                .headers
                .with_route(&self.hub_name, &request.headers.source()),
            path_params: request.path_params.clone(),
            payload: Some(json!({ "providers": providers })),
        };

        self.forward_from_hub(&SERVICES, response, parent_span).await
    }

    async fn forward_with_error_headers(
        &self,
        resource: &'static Resource,
        request: ForwardRequest,
        error_headers: FspiopHeaders,
        parent_span: Option<Arc<dyn Span>>,
    ) -> Result<(), ServiceError> {
        let route = resource.route(request.method)?;
        let resource_id = resource.resource_id(&request.path_params, request.payload.as_ref())?;

        let span = start_span(
            parent_span.as_deref(),
            resource.span_name,
            span_tags(resource, request.method, &resource_id),
            &request.headers,
            request.payload.as_ref(),
        );

        let result = self
            .send(
                route,
                &request.headers,
                &request.path_params,
                request.payload.as_ref(),
            )
            .await;

        let error = match result {
            Ok(()) => {
                if let Some(span) = &span {
                    span.finish(SpanStatus::Success);
                }
                return Ok(());
            }
            Err(error) => canonicalize(error),
        };

        tracing::warn!(
            resource = resource.event_type,
            method = %request.method,
            %resource_id,
            error_code = error.code.code(),
            %error,
            "Forwarding failed, sending error callback"
        );

        let delivery = self
            .forward_error(
                resource,
                ForwardErrorRequest {
                    headers: error_headers,
                    path_params: resource.error_path_params(&resource_id),
                    error: error.to_api_error(&self.error_handling),
                },
                span.clone(),
            )
            .await;

        if let Some(span) = &span {
            span.error(&error);
            span.finish(SpanStatus::Error);
        }

        match delivery {
            Ok(()) => Err(error.into()),
            Err(delivery_error) => {
                tracing::warn!(
                    original_error = %error,
                    %delivery_error,
                    "Original forwarding error superseded by error callback failure"
                );
                Err(delivery_error)
            }
        }
    }

    async fn send(
        &self,
        route: &Route,
        headers: &FspiopHeaders,
        path_params: &PathParams,
        payload: Option<&serde_json::Value>,
    ) -> Result<(), ServiceError> {
        let url = self
            .endpoint_resolver
            .resolve(
                &headers.destination(),
                route.endpoint_type,
                route.path,
                path_params,
            )
            .await?;

        let body = match (route.method, payload) {
            (Method::Get, _) | (_, None) => None,
            (_, Some(payload)) => Some(serde_json::to_vec(payload)?),
        };

        self.http_client
            .send(&url, body, Some(headers.as_map().clone()), route.method)
            .await?
            .error_for_status()?;

        Ok(())
    }
}

fn span_tags(resource: &Resource, method: Method, resource_id: &str) -> Tags {
    Tags::from([
        ("eventType".to_owned(), resource.event_type.to_owned()),
        ("eventAction".to_owned(), method.event_action().to_owned()),
        (resource.id_tag.to_owned(), resource_id.to_owned()),
    ])
}

fn start_span(
    parent: Option<&dyn Span>,
    name: &str,
    tags: Tags,
    headers: &FspiopHeaders,
    payload: Option<&serde_json::Value>,
) -> Option<Arc<dyn Span>> {
    let span = parent?.child(name);
    span.set_tags(&tags);
    span.audit(
        &AuditMessage {
            headers: headers.as_map().clone(),
            payload: payload.cloned(),
        },
        AuditAction::Start,
    );
    Some(span)
}
