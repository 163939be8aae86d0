use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use sentry::{Hub, SentryFutureExt};
use thirdparty_core::model::headers::{FSPIOP_DESTINATION, FSPIOP_SOURCE};

use crate::metrics;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub source: Option<&'a str>,
    pub destination: Option<&'a str>,
}

// create new sentry hub per request
pub async fn sentry_layer(request: Request<Body>, next: Next) -> Response {
    async {
        let HttpRequestContext {
            path,
            method,
            request_id,
            source,
            destination,
        } = get_http_request_context(&request);

        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(|matched| matched.as_str())
            .unwrap_or(path);
        let method_path = format!("{method} {route}");

        sentry::configure_scope(|scope| {
            scope.set_tag("http-request", method_path);

            if let Some(request_id) = request_id {
                scope.set_tag("request-id", request_id);
            }
            if let Some(source) = source {
                scope.set_tag(FSPIOP_SOURCE, source);
            }
            if let Some(destination) = destination {
                scope.set_tag(FSPIOP_DESTINATION, destination);
            }
        });

        next.run(request).await
    }
    // make sure that the future is run in the new hub
    .bind_hub(Hub::new_from_top(Hub::main()))
    .await
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    metrics::track_request_count_and_time(
        &method,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|header| header.to_str().ok())
            .filter(|value| !value.is_empty())
    };

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id: header("x-request-id"),
        source: header(FSPIOP_SOURCE),
        destination: header(FSPIOP_DESTINATION),
    }
}
