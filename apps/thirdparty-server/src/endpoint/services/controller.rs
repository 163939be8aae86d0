use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use thirdparty_core::model::PathParams;
use thirdparty_core::model::error_information::ErrorInformationObject;
use thirdparty_core::provider::http_client::Method;
use thirdparty_core::service::forward::resource::SERVICES;

use crate::dto::error::ErrorResponseRestDTO;
use crate::endpoint::dispatch::{Forward, dispatch, error_request, forward_request};
use crate::router::AppState;

fn service_type_params(service_type: String) -> PathParams {
    PathParams::from([(SERVICES.path_param.to_owned(), service_type)])
}

pub(crate) async fn get_services(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(service_type), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(
        Method::Get,
        &headers,
        service_type_params(service_type),
        None,
    )?;
    Ok(dispatch(&state, Forward::Services(request)))
}

pub(crate) async fn put_services(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(service_type), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(
        Method::Put,
        &headers,
        service_type_params(service_type),
        Some(payload),
    )?;
    Ok(dispatch(&state, Forward::Request(&SERVICES, request)))
}

pub(crate) async fn put_services_error(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(service_type), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(error), _): WithRejection<
        Json<ErrorInformationObject>,
        ErrorResponseRestDTO,
    >,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = error_request(&headers, service_type_params(service_type), error)?;
    Ok(dispatch(&state, Forward::Error(&SERVICES, request)))
}
