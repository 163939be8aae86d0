use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Selects one of a participant's registered callback URLs.
///
/// The string forms match the endpoint types registered in the central
/// participant directory.
#[derive(
    Debug,
    Copy,
    Clone,
    Display,
    EnumString,
    AsRefStr,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EndpointType {
    TpCbUrlAccountsGet,
    TpCbUrlAccountsPut,
    TpCbUrlAccountsPutError,

    TpCbUrlConsentRequestPost,
    TpCbUrlConsentRequestPut,
    TpCbUrlConsentRequestPatch,
    TpCbUrlConsentRequestPutError,

    TpCbUrlConsentPost,
    TpCbUrlConsentPut,
    TpCbUrlConsentPatch,
    TpCbUrlConsentPutError,

    TpCbUrlConsentGenerateChallengePost,
    TpCbUrlConsentGenerateChallengePutError,

    TpCbUrlServicesGet,
    TpCbUrlServicesPut,
    TpCbUrlServicesPutError,

    TpCbUrlTransactionRequestAuthPost,
    TpCbUrlTransactionRequestAuthPut,
    TpCbUrlTransactionRequestAuthPutError,

    TpCbUrlTransactionRequestVerifyPost,
    TpCbUrlTransactionRequestVerifyPut,
    TpCbUrlTransactionRequestVerifyPutError,

    TpCbUrlTransactionRequestPost,
    TpCbUrlTransactionRequestGet,
    TpCbUrlTransactionRequestPut,
    TpCbUrlTransactionRequestPatch,
    TpCbUrlTransactionRequestPutError,
}
