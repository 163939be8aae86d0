use reqwest::Method as ReqwestMethod;
use serde_json::{Value, json};
use similar_asserts::assert_eq;
use wiremock::http::Method;

use crate::utils::api_client::fspiop_headers;
use crate::utils::context::TestContext;
use crate::utils::mock_server::header;

#[tokio::test]
async fn test_unresolvable_destination_sends_error_to_source() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.participant_endpoints("dfspA", &[]).await;
    context
        .server_mock
        .participant_endpoints("pispA", &["TP_CB_URL_CONSENT_REQUEST_PUT_ERROR"])
        .await;
    context
        .server_mock
        .callback(Method::PUT, "/consentRequests/456/error", 200)
        .await;

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::POST,
            "/consentRequests",
            &fspiop_headers("pispA", "dfspA"),
            Some(json!({ "consentRequestId": "456", "userId": "dfspa.username" })),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 202);

    let callback = context
        .server_mock
        .wait_for_request(Method::PUT, "/consentRequests/456/error")
        .await;
    assert_eq!(header(&callback, "fspiop-source"), "Hub");
    assert_eq!(header(&callback, "fspiop-destination"), "pispA");

    let body: Value = callback.body_json().unwrap();
    assert_eq!(body["errorInformation"]["errorCode"], "3201");
    assert_eq!(
        body["errorInformation"]["errorDescription"],
        "Cannot find endpoint `TP_CB_URL_CONSENT_REQUEST_POST` for participant `dfspA`"
    );
}

#[tokio::test]
async fn test_destination_failure_sends_error_to_source() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .participant_endpoints("dfspA", &["TP_CB_URL_TRANSACTION_REQUEST_POST"])
        .await;
    context
        .server_mock
        .participant_endpoints("pispA", &["TP_CB_URL_TRANSACTION_REQUEST_PUT_ERROR"])
        .await;
    context
        .server_mock
        .callback(Method::POST, "/thirdpartyRequests/transactions", 500)
        .await;
    context
        .server_mock
        .callback(Method::PUT, "/thirdpartyRequests/transactions/b51ec534/error", 200)
        .await;

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::POST,
            "/thirdpartyRequests/transactions",
            &fspiop_headers("pispA", "dfspA"),
            Some(json!({ "transactionRequestId": "b51ec534", "sourceAccountId": "dfspa.alice.1234" })),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 202);

    let callback = context
        .server_mock
        .wait_for_request(Method::PUT, "/thirdpartyRequests/transactions/b51ec534/error")
        .await;
    assert_eq!(header(&callback, "fspiop-destination"), "pispA");
    assert_eq!(
        callback.body_json::<Value>().unwrap()["errorInformation"]["errorCode"],
        "1001"
    );
}

#[tokio::test]
async fn test_inbound_error_callback_forwarded_unchanged() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .participant_endpoints("pispA", &["TP_CB_URL_CONSENT_PUT_ERROR"])
        .await;
    context
        .server_mock
        .callback(Method::PUT, "/consents/123/error", 200)
        .await;

    let error = json!({
        "errorInformation": {
            "errorCode": "7200",
            "errorDescription": "Generic Thirdparty account linking error",
        }
    });

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::PUT,
            "/consents/123/error",
            &fspiop_headers("dfspA", "pispA"),
            Some(error.clone()),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);

    let callback = context
        .server_mock
        .wait_for_request(Method::PUT, "/consents/123/error")
        .await;
    assert_eq!(header(&callback, "fspiop-source"), "dfspA");
    assert_eq!(header(&callback, "fspiop-destination"), "pispA");
    assert_eq!(callback.body_json::<Value>().unwrap(), error);
}
