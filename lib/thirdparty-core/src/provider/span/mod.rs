use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use strum::Display;

use crate::model::protocol_error::ProtocolError;
use crate::provider::http_client::Headers;

pub mod tracing_span;


pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AuditAction {
    Start,
    Ingress,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SpanStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditMessage {
    pub headers: Headers,
    pub payload: Option<serde_json::Value>,
}

/// Distributed tracing and audit handle.
///
/// Whoever creates a span closes it; callers never finish a span they
/// received from someone else.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Span: Send + Sync {
    fn child(&self, service: &str) -> Arc<dyn Span>;

    fn set_tags(&self, tags: &Tags);

    fn audit(&self, message: &AuditMessage, action: AuditAction);

    fn error(&self, error: &ProtocolError);

    fn finish(&self, status: SpanStatus);
}
