use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::build_info;
use crate::metrics::encode_metrics;

pub(crate) async fn get_build_info() -> Json<Value> {
    Json::from(json!({
        "name": build_info::PKG_NAME,
        "version": build_info::PKG_VERSION,
        "commit": build_info::COMMIT_HASH,
        "pipeline_id": build_info::PIPELINE_ID,
    }))
}

pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

pub(crate) async fn get_metrics() -> Response {
    match encode_metrics() {
        Ok(result) => (StatusCode::OK, result).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Metrics encoding error: {error:?}"),
        )
            .into_response(),
    }
}
