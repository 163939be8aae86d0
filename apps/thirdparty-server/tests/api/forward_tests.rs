use reqwest::Method as ReqwestMethod;
use serde_json::{Value, json};
use similar_asserts::assert_eq;
use wiremock::http::Method;

use crate::utils::api_client::fspiop_headers;
use crate::utils::context::TestContext;
use crate::utils::mock_server::header;

#[tokio::test]
async fn test_post_consents_forwarded_to_destination() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .participant_endpoints("dfspA", &["TP_CB_URL_CONSENT_POST"])
        .await;
    context
        .server_mock
        .callback(Method::POST, "/consents", 202)
        .await;

    let payload = json!({
        "consentId": "8e34f91d-d078-4077-8263-2c047876fcf6",
        "consentRequestId": "6988c34f-055b-4ed5-b223-b10c8a2e2329",
        "scopes": [{ "accountId": "dfspa.username.1234", "actions": ["accounts.transfer"] }],
    });

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::POST,
            "/consents",
            &fspiop_headers("pispA", "dfspA"),
            Some(payload.clone()),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 202);

    let forwarded = context
        .server_mock
        .wait_for_request(Method::POST, "/consents")
        .await;
    assert_eq!(header(&forwarded, "fspiop-source"), "pispA");
    assert_eq!(header(&forwarded, "fspiop-destination"), "dfspA");
    assert_eq!(forwarded.body_json::<Value>().unwrap(), payload);
}

#[tokio::test]
async fn test_patch_transaction_acknowledged_with_ok() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .participant_endpoints("pispA", &["TP_CB_URL_TRANSACTION_REQUEST_PATCH"])
        .await;
    context
        .server_mock
        .callback(Method::PATCH, "/thirdpartyRequests/transactions/b51ec534", 200)
        .await;

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::PATCH,
            "/thirdpartyRequests/transactions/b51ec534",
            &fspiop_headers("dfspA", "pispA"),
            Some(json!({ "transactionRequestState": "ACCEPTED", "transactionState": "COMPLETED" })),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);

    let forwarded = context
        .server_mock
        .wait_for_request(Method::PATCH, "/thirdpartyRequests/transactions/b51ec534")
        .await;
    assert_eq!(
        forwarded.body_json::<Value>().unwrap()["transactionState"],
        "COMPLETED"
    );
}

#[tokio::test]
async fn test_get_account_forwarded_without_body() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .server_mock
        .participant_endpoints("dfspA", &["TP_CB_URL_ACCOUNTS_GET"])
        .await;
    context
        .server_mock
        .callback(Method::GET, "/accounts/username1234", 202)
        .await;

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::GET,
            "/accounts/username1234",
            &fspiop_headers("pispA", "dfspA"),
            None,
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 202);

    let forwarded = context
        .server_mock
        .wait_for_request(Method::GET, "/accounts/username1234")
        .await;
    assert!(forwarded.body.is_empty());
}

#[tokio::test]
async fn test_missing_destination_header_rejected() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::POST,
            "/consentRequests",
            &[("FSPIOP-Source", "pispA")],
            Some(json!({ "consentRequestId": "456" })),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["errorInformation"]["errorCode"], "3102");
    assert!(
        context
            .server_mock
            .find_request(&Method::GET, "/participants/pispA/endpoints")
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::PUT,
            "/consents/123/error",
            &fspiop_headers("dfspA", "pispA"),
            Some(json!({ "unexpected": true })),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["errorInformation"]["errorCode"], "3100");
}

#[tokio::test]
async fn test_services_answered_from_configured_providers() {
    // GIVEN
    let context = TestContext::new_with_config(Some(indoc::indoc! {"
        core:
            services:
                providers:
                    THIRD_PARTY_DEPOSIT:
                        - dfspA
                        - dfspB
    "}))
    .await;
    context
        .server_mock
        .participant_endpoints("pispA", &["TP_CB_URL_SERVICES_PUT"])
        .await;
    context
        .server_mock
        .callback(Method::PUT, "/services/THIRD_PARTY_DEPOSIT", 200)
        .await;

    // WHEN
    let resp = context
        .api
        .send(
            ReqwestMethod::GET,
            "/services/THIRD_PARTY_DEPOSIT",
            &fspiop_headers("pispA", "Hub"),
            None,
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 202);

    let callback = context
        .server_mock
        .wait_for_request(Method::PUT, "/services/THIRD_PARTY_DEPOSIT")
        .await;
    assert_eq!(header(&callback, "fspiop-source"), "Hub");
    assert_eq!(header(&callback, "fspiop-destination"), "pispA");
    assert_eq!(
        callback.body_json::<Value>().unwrap(),
        json!({ "providers": ["dfspA", "dfspB"] })
    );
}
