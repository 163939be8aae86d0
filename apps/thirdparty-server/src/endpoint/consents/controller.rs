use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use thirdparty_core::model::error_information::ErrorInformationObject;
use thirdparty_core::provider::http_client::Method;
use thirdparty_core::service::forward::resource::{CONSENTS, CONSENTS_GENERATE_CHALLENGE};

use crate::dto::error::ErrorResponseRestDTO;
use crate::endpoint::dispatch::{
    Forward, dispatch, error_request, forward_request, id_params,
};
use crate::router::AppState;

pub(crate) async fn post_consents(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Post, &headers, Default::default(), Some(payload))?;
    Ok(dispatch(&state, Forward::Request(&CONSENTS, request)))
}

pub(crate) async fn put_consents(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Put, &headers, id_params(id), Some(payload))?;
    Ok(dispatch(&state, Forward::Request(&CONSENTS, request)))
}

pub(crate) async fn patch_consents(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Patch, &headers, id_params(id), Some(payload))?;
    Ok(dispatch(&state, Forward::Request(&CONSENTS, request)))
}

pub(crate) async fn put_consents_error(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(error), _): WithRejection<
        Json<ErrorInformationObject>,
        ErrorResponseRestDTO,
    >,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = error_request(&headers, id_params(id), error)?;
    Ok(dispatch(&state, Forward::Error(&CONSENTS, request)))
}

pub(crate) async fn post_consents_generate_challenge(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Post, &headers, id_params(id), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&CONSENTS_GENERATE_CHALLENGE, request),
    ))
}
