use serde_json::{Value, json};
use similar_asserts::assert_eq;
use thirdparty_core::ThirdpartyCore;
use thirdparty_server::consumer::handle_notification_payload;
use wiremock::http::Method;

use crate::utils::context::create_config;
use crate::utils::mock_server::{MockServer, header};

const COMMITTED_PAYLOAD: &str = "data:application/vnd.interoperability.transfers+json;version=1.0;base64,eyJ0cmFuc2ZlclN0YXRlIjoiQ09NTUlUVEVEIiwiY29tcGxldGVkVGltZXN0YW1wIjoiMjAyMC0wNi0wMVQxMDowMDowMC4wMDBaIn0=";

fn notification(action: &str) -> Value {
    json!({
        "value": {
            "from": "dfspA",
            "to": "dfspB",
            "id": "transfer-1",
            "content": {
                "uriParams": { "id": "transfer-1" },
                "headers": {
                    "FSPIOP-Source": "dfspA",
                    "FSPIOP-Destination": "dfspB",
                    "Content-Type": "application/vnd.interoperability.transfers+json;version=1.0",
                },
                "payload": COMMITTED_PAYLOAD,
            },
            "metadata": {
                "event": {
                    "id": "event-1",
                    "type": "notification",
                    "action": action,
                    "createdAt": "2020-06-01T10:00:00.000Z",
                    "state": { "status": "success", "code": 0 },
                }
            }
        }
    })
}

async fn setup() -> (MockServer, ThirdpartyCore) {
    let server_mock = MockServer::new().await;
    let config = create_config(
        &server_mock.uri(),
        Some(indoc::indoc! {"
            core:
                notification:
                    pispId: pispA
                    transactionRequestId: b51ec534
        "}),
    );

    (server_mock, ThirdpartyCore::new(config.core, None))
}

#[tokio::test]
async fn test_committed_notification_delivered_to_pisp() {
    // GIVEN
    let (server_mock, core) = setup().await;
    server_mock
        .participant_endpoints("pispA", &["TP_CB_URL_TRANSACTION_REQUEST_PUT"])
        .await;
    server_mock
        .callback(Method::PUT, "/thirdpartyRequests/transactions/b51ec534", 200)
        .await;

    let payload = serde_json::to_vec(&json!([notification("commit"), notification("prepare")]))
        .unwrap();

    // WHEN
    handle_notification_payload(&core.notification_service, &payload).await;

    // THEN
    let callback = server_mock
        .find_request(&Method::PUT, "/thirdpartyRequests/transactions/b51ec534")
        .await
        .unwrap();
    assert_eq!(header(&callback, "fspiop-source"), "Hub");
    assert_eq!(header(&callback, "fspiop-destination"), "pispA");
    assert_eq!(
        callback.body_json::<Value>().unwrap(),
        json!({
            "transferState": "COMMITTED",
            "completedTimestamp": "2020-06-01T10:00:00.000Z",
        })
    );

    let deliveries = server_mock
        .received_requests(&Method::PUT, "/thirdpartyRequests/transactions/b51ec534")
        .await;
    assert_eq!(deliveries, 1);
}

#[tokio::test]
async fn test_single_non_commit_notification_ignored() {
    // GIVEN
    let (server_mock, core) = setup().await;

    let payload = serde_json::to_vec(&notification("abort")).unwrap();

    // WHEN
    handle_notification_payload(&core.notification_service, &payload).await;

    // THEN
    assert!(
        server_mock
            .find_request(&Method::GET, "/participants/pispA/endpoints")
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_malformed_notification_dropped() {
    let (server_mock, core) = setup().await;

    handle_notification_payload(&core.notification_service, b"not json").await;

    assert!(
        server_mock
            .find_request(&Method::GET, "/participants/pispA/endpoints")
            .await
            .is_none()
    );
}
