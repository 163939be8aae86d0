use thiserror::Error;

use super::participant::ParticipantId;
use crate::provider::http_client::Headers;

pub const FSPIOP_SOURCE: &str = "fspiop-source";
pub const FSPIOP_DESTINATION: &str = "fspiop-destination";

const HOP_BY_HOP: [&str; 4] = ["host", "content-length", "connection", "transfer-encoding"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Missing mandatory header `{0}`")]
    Missing(&'static str),
}

/// Request headers of one hop, keyed by lower-case name.
///
/// Always carries `fspiop-source` and `fspiop-destination`; the constructor
/// rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FspiopHeaders(Headers);

impl FspiopHeaders {
    /// Normalizes inbound headers: names are lower-cased and hop-by-hop
    /// headers are dropped.
    pub fn from_inbound<K, V>(headers: impl IntoIterator<Item = (K, V)>) -> Result<Self, HeaderError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
            .collect::<Headers>();

        Self::try_from(headers)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn source(&self) -> ParticipantId {
        self.0
            .get(FSPIOP_SOURCE)
            .map(|value| value.as_str().into())
            .unwrap_or_else(|| "".into())
    }

    pub fn destination(&self) -> ParticipantId {
        self.0
            .get(FSPIOP_DESTINATION)
            .map(|value| value.as_str().into())
            .unwrap_or_else(|| "".into())
    }

    /// Headers of an error callback generated by the hub: the hub becomes the
    /// source and the original source becomes the destination.
    pub fn reversed_for_error(&self, hub: &ParticipantId) -> Self {
        let original_source = self.source();
        let mut reversed = self.with_route(hub, &original_source);
        reversed.0.remove("content-length");
        reversed
    }

    pub fn with_route(&self, source: &ParticipantId, destination: &ParticipantId) -> Self {
        let mut headers = self.0.clone();
        headers.insert(FSPIOP_SOURCE.to_owned(), source.to_string());
        headers.insert(FSPIOP_DESTINATION.to_owned(), destination.to_string());
        Self(headers)
    }

    pub fn as_map(&self) -> &Headers {
        &self.0
    }

    pub fn into_inner(self) -> Headers {
        self.0
    }
}

/// Lower-cases names and drops hop-by-hop headers, which never describe the
/// next hop's request.
impl TryFrom<Headers> for FspiopHeaders {
    type Error = HeaderError;

    fn try_from(headers: Headers) -> Result<Self, Self::Error> {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .filter(|(name, _)| !HOP_BY_HOP.contains(&name.as_str()))
            .collect::<Headers>();

        for required in [FSPIOP_SOURCE, FSPIOP_DESTINATION] {
            if headers.get(required).is_none_or(|value| value.is_empty()) {
                return Err(HeaderError::Missing(required));
            }
        }

        Ok(Self(headers))
    }
}
