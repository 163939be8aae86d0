use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::Router;
use thirdparty_core::ThirdpartyCore;
use thirdparty_core::config::core_config::AppConfig;
use thirdparty_core::model::protocol_error::{ErrorCode, ProtocolError};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};

use crate::ServerConfig;
use crate::consumer::start_notification_consumer;
use crate::dto::error::ErrorResponseRestDTO;
use crate::endpoint::{
    accounts, consent_requests, consents, misc, services, thirdparty_requests,
};
use crate::middleware::get_http_request_context;

pub(crate) struct InternalAppState {
    pub core: ThirdpartyCore,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>) {
    listener.set_nonblocking(true).expect("Failed to set non-blocking listener");

    let core = ThirdpartyCore::new(config.core, None);

    let config = Arc::new(config.app);

    if let Some(nats_url) = &config.nats_url {
        let _consumer = start_notification_consumer(
            nats_url,
            &config.notification_subject,
            core.notification_service.clone(),
        )
        .await
        .expect("Failed to start notification consumer");
    }

    let state: AppState = Arc::new(InternalAppState { core });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let adapter = Router::new()
        .route(
            "/accounts/{ID}",
            get(accounts::controller::get_accounts).put(accounts::controller::put_accounts),
        )
        .route(
            "/accounts/{ID}/error",
            put(accounts::controller::put_accounts_error),
        )
        .route(
            "/consentRequests",
            post(consent_requests::controller::post_consent_requests),
        )
        .route(
            "/consentRequests/{ID}",
            put(consent_requests::controller::put_consent_requests)
                .patch(consent_requests::controller::patch_consent_requests),
        )
        .route(
            "/consentRequests/{ID}/error",
            put(consent_requests::controller::put_consent_requests_error),
        )
        .route("/consents", post(consents::controller::post_consents))
        .route(
            "/consents/{ID}",
            put(consents::controller::put_consents).patch(consents::controller::patch_consents),
        )
        .route(
            "/consents/{ID}/error",
            put(consents::controller::put_consents_error),
        )
        .route(
            "/consents/{ID}/generateChallenge",
            post(consents::controller::post_consents_generate_challenge),
        )
        .route(
            "/services/{ServiceType}",
            get(services::controller::get_services).put(services::controller::put_services),
        )
        .route(
            "/services/{ServiceType}/error",
            put(services::controller::put_services_error),
        )
        .route(
            "/thirdpartyRequests/authorizations",
            post(thirdparty_requests::controller::post_authorizations),
        )
        .route(
            "/thirdpartyRequests/authorizations/{ID}",
            put(thirdparty_requests::controller::put_authorizations),
        )
        .route(
            "/thirdpartyRequests/authorizations/{ID}/error",
            put(thirdparty_requests::controller::put_authorizations_error),
        )
        .route(
            "/thirdpartyRequests/verifications",
            post(thirdparty_requests::controller::post_verifications),
        )
        .route(
            "/thirdpartyRequests/verifications/{ID}",
            put(thirdparty_requests::controller::put_verifications),
        )
        .route(
            "/thirdpartyRequests/verifications/{ID}/error",
            put(thirdparty_requests::controller::put_verifications_error),
        )
        .route(
            "/thirdpartyRequests/transactions",
            post(thirdparty_requests::controller::post_transactions),
        )
        .route(
            "/thirdpartyRequests/transactions/{ID}",
            get(thirdparty_requests::controller::get_transactions)
                .put(thirdparty_requests::controller::put_transactions)
                .patch(thirdparty_requests::controller::patch_transactions),
        )
        .route(
            "/thirdpartyRequests/transactions/{ID}/error",
            put(thirdparty_requests::controller::put_transactions_error),
        );

    let mut technical_endpoints = Router::new();
    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    Router::new()
        .merge(adapter)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "thirdparty-server",
                        RequestId = context.request_id,
                        FspiopSource = context.source,
                        FspiopDestination = context.destination,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::sentry_layer))
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    let body = ErrorResponseRestDTO::from(ProtocolError::new(
        ErrorCode::InternalServerError,
        message,
    ));
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
