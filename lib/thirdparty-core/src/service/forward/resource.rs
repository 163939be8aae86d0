use crate::model::PathParams;
use crate::model::endpoint_type::EndpointType;
use crate::provider::http_client::Method;
use crate::service::error::ServiceError;

/// Path template and endpoint type used for one verb of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub endpoint_type: EndpointType,
}

/// Everything that differs between resource families; the forwarding
/// algorithm itself is shared.
#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    /// Span name of the success-path forward.
    pub span_name: &'static str,
    /// Span name of the error-callback forward.
    pub error_span_name: &'static str,
    pub event_type: &'static str,
    pub id_tag: &'static str,
    /// Path parameter that identifies the resource instance.
    pub path_param: &'static str,
    /// Body field that carries the id of a resource being created. When the
    /// payload has it, the request is a create, whatever the verb.
    pub create_id_field: Option<&'static str>,
    pub routes: &'static [Route],
    pub error_path: &'static str,
    pub error_endpoint_type: EndpointType,
}

impl Resource {
    pub fn route(&self, method: Method) -> Result<&Route, ServiceError> {
        self.routes
            .iter()
            .find(|route| route.method == method)
            .ok_or(ServiceError::UnsupportedMethod(method))
    }

    pub fn resource_id(
        &self,
        path_params: &PathParams,
        payload: Option<&serde_json::Value>,
    ) -> Result<String, ServiceError> {
        let created = self.create_id_field.and_then(|field| {
            payload
                .and_then(|payload| payload.get(field))
                .and_then(serde_json::Value::as_str)
        });

        match created {
            Some(id) => Ok(id.to_owned()),
            None => path_params
                .get(self.path_param)
                .cloned()
                .ok_or(ServiceError::MissingResourceId(self.path_param)),
        }
    }

    /// Path parameters addressing the resource's error callback.
    pub fn error_path_params(&self, resource_id: &str) -> PathParams {
        PathParams::from([(self.path_param.to_owned(), resource_id.to_owned())])
    }
}

const ID: &str = "ID";

pub static ACCOUNTS: Resource = Resource {
    span_name: "forwardAccountsRequest",
    error_span_name: "forwardAccountsRequestError",
    event_type: "accounts",
    id_tag: "accountId",
    path_param: ID,
    create_id_field: None,
    routes: &[
        Route {
            method: Method::Get,
            path: "/accounts/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlAccountsGet,
        },
        Route {
            method: Method::Put,
            path: "/accounts/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlAccountsPut,
        },
    ],
    error_path: "/accounts/{{ID}}/error",
    error_endpoint_type: EndpointType::TpCbUrlAccountsPutError,
};

pub static CONSENT_REQUESTS: Resource = Resource {
    span_name: "forwardConsentRequestsRequest",
    error_span_name: "forwardConsentRequestsRequestError",
    event_type: "consentRequest",
    id_tag: "consentRequestId",
    path_param: ID,
    create_id_field: Some("consentRequestId"),
    routes: &[
        Route {
            method: Method::Post,
            path: "/consentRequests",
            endpoint_type: EndpointType::TpCbUrlConsentRequestPost,
        },
        Route {
            method: Method::Put,
            path: "/consentRequests/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlConsentRequestPut,
        },
        Route {
            method: Method::Patch,
            path: "/consentRequests/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlConsentRequestPatch,
        },
    ],
    error_path: "/consentRequests/{{ID}}/error",
    error_endpoint_type: EndpointType::TpCbUrlConsentRequestPutError,
};

pub static CONSENTS: Resource = Resource {
    span_name: "forwardConsentsRequest",
    error_span_name: "forwardConsentsRequestError",
    event_type: "consent",
    id_tag: "consentId",
    path_param: ID,
    create_id_field: Some("consentId"),
    routes: &[
        Route {
            method: Method::Post,
            path: "/consents",
            endpoint_type: EndpointType::TpCbUrlConsentPost,
        },
        Route {
            method: Method::Put,
            path: "/consents/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlConsentPut,
        },
        Route {
            method: Method::Patch,
            path: "/consents/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlConsentPatch,
        },
    ],
    error_path: "/consents/{{ID}}/error",
    error_endpoint_type: EndpointType::TpCbUrlConsentPutError,
};

pub static CONSENTS_GENERATE_CHALLENGE: Resource = Resource {
    span_name: "forwardConsentsGenerateChallengeRequest",
    error_span_name: "forwardConsentsGenerateChallengeRequestError",
    event_type: "consent",
    id_tag: "consentId",
    path_param: ID,
    create_id_field: None,
    routes: &[Route {
        method: Method::Post,
        path: "/consents/{{ID}}/generateChallenge",
        endpoint_type: EndpointType::TpCbUrlConsentGenerateChallengePost,
    }],
    error_path: "/consents/{{ID}}/error",
    error_endpoint_type: EndpointType::TpCbUrlConsentGenerateChallengePutError,
};

pub static SERVICES: Resource = Resource {
    span_name: "forwardServicesRequest",
    error_span_name: "forwardServicesRequestError",
    event_type: "service",
    id_tag: "serviceType",
    path_param: "ServiceType",
    create_id_field: None,
    routes: &[
        Route {
            method: Method::Get,
            path: "/services/{{ServiceType}}",
            endpoint_type: EndpointType::TpCbUrlServicesGet,
        },
        Route {
            method: Method::Put,
            path: "/services/{{ServiceType}}",
            endpoint_type: EndpointType::TpCbUrlServicesPut,
        },
    ],
    error_path: "/services/{{ServiceType}}/error",
    error_endpoint_type: EndpointType::TpCbUrlServicesPutError,
};

pub static THIRDPARTY_AUTHORIZATIONS: Resource = Resource {
    span_name: "forwardAuthorizationRequest",
    error_span_name: "forwardAuthorizationRequestError",
    event_type: "authorization",
    id_tag: "authorizationRequestId",
    path_param: ID,
    create_id_field: Some("authorizationRequestId"),
    routes: &[
        Route {
            method: Method::Post,
            path: "/thirdpartyRequests/authorizations",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestAuthPost,
        },
        Route {
            method: Method::Put,
            path: "/thirdpartyRequests/authorizations/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestAuthPut,
        },
    ],
    error_path: "/thirdpartyRequests/authorizations/{{ID}}/error",
    error_endpoint_type: EndpointType::TpCbUrlTransactionRequestAuthPutError,
};

pub static THIRDPARTY_VERIFICATIONS: Resource = Resource {
    span_name: "forwardVerificationRequest",
    error_span_name: "forwardVerificationRequestError",
    event_type: "verification",
    id_tag: "verificationRequestId",
    path_param: ID,
    create_id_field: Some("verificationRequestId"),
    routes: &[
        Route {
            method: Method::Post,
            path: "/thirdpartyRequests/verifications",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestVerifyPost,
        },
        Route {
            method: Method::Put,
            path: "/thirdpartyRequests/verifications/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestVerifyPut,
        },
    ],
    error_path: "/thirdpartyRequests/verifications/{{ID}}/error",
    error_endpoint_type: EndpointType::TpCbUrlTransactionRequestVerifyPutError,
};

pub static THIRDPARTY_TRANSACTIONS: Resource = Resource {
    span_name: "forwardTransactionRequest",
    error_span_name: "forwardTransactionRequestError",
    event_type: "transactionRequest",
    id_tag: "transactionRequestId",
    path_param: ID,
    create_id_field: Some("transactionRequestId"),
    routes: &[
        Route {
            method: Method::Post,
            path: "/thirdpartyRequests/transactions",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestPost,
        },
        Route {
            method: Method::Get,
            path: "/thirdpartyRequests/transactions/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestGet,
        },
        Route {
            method: Method::Put,
            path: "/thirdpartyRequests/transactions/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestPut,
        },
        Route {
            method: Method::Patch,
            path: "/thirdpartyRequests/transactions/{{ID}}",
            endpoint_type: EndpointType::TpCbUrlTransactionRequestPatch,
        },
    ],
    error_path: "/thirdpartyRequests/transactions/{{ID}}/error",
    error_endpoint_type: EndpointType::TpCbUrlTransactionRequestPutError,
};
