use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use thirdparty_core::model::error_information::ErrorInformationObject;
use thirdparty_core::provider::http_client::Method;
use thirdparty_core::service::forward::resource::{
    THIRDPARTY_AUTHORIZATIONS, THIRDPARTY_TRANSACTIONS, THIRDPARTY_VERIFICATIONS,
};

use crate::dto::error::ErrorResponseRestDTO;
use crate::endpoint::dispatch::{
    Forward, dispatch, error_request, forward_request, id_params,
};
use crate::router::AppState;

pub(crate) async fn post_authorizations(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Post, &headers, Default::default(), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_AUTHORIZATIONS, request),
    ))
}

pub(crate) async fn put_authorizations(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Put, &headers, id_params(id), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_AUTHORIZATIONS, request),
    ))
}

pub(crate) async fn put_authorizations_error(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(error), _): WithRejection<
        Json<ErrorInformationObject>,
        ErrorResponseRestDTO,
    >,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = error_request(&headers, id_params(id), error)?;
    Ok(dispatch(
        &state,
        Forward::Error(&THIRDPARTY_AUTHORIZATIONS, request),
    ))
}

pub(crate) async fn post_verifications(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Post, &headers, Default::default(), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_VERIFICATIONS, request),
    ))
}

pub(crate) async fn put_verifications(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Put, &headers, id_params(id), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_VERIFICATIONS, request),
    ))
}

pub(crate) async fn put_verifications_error(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(error), _): WithRejection<
        Json<ErrorInformationObject>,
        ErrorResponseRestDTO,
    >,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = error_request(&headers, id_params(id), error)?;
    Ok(dispatch(
        &state,
        Forward::Error(&THIRDPARTY_VERIFICATIONS, request),
    ))
}

pub(crate) async fn post_transactions(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Post, &headers, Default::default(), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_TRANSACTIONS, request),
    ))
}

pub(crate) async fn get_transactions(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Get, &headers, id_params(id), None)?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_TRANSACTIONS, request),
    ))
}

pub(crate) async fn put_transactions(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Put, &headers, id_params(id), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_TRANSACTIONS, request),
    ))
}

pub(crate) async fn patch_transactions(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ErrorResponseRestDTO>,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = forward_request(Method::Patch, &headers, id_params(id), Some(payload))?;
    Ok(dispatch(
        &state,
        Forward::Request(&THIRDPARTY_TRANSACTIONS, request),
    ))
}

pub(crate) async fn put_transactions_error(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(error), _): WithRejection<
        Json<ErrorInformationObject>,
        ErrorResponseRestDTO,
    >,
) -> Result<StatusCode, ErrorResponseRestDTO> {
    let request = error_request(&headers, id_params(id), error)?;
    Ok(dispatch(
        &state,
        Forward::Error(&THIRDPARTY_TRANSACTIONS, request),
    ))
}
