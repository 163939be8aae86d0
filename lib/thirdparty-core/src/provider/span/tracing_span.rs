use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use uuid::Uuid;

use super::{AuditAction, AuditMessage, Span, SpanStatus, Tags};
use crate::model::protocol_error::ProtocolError;

/// [`Span`] backed by `tracing` spans; tags, audit records and the outcome
/// are emitted as events inside the span.
pub struct TracingSpan {
    span: tracing::Span,
    span_id: Uuid,
    finished: AtomicBool,
}

impl TracingSpan {
    pub fn root(service: &str) -> Arc<Self> {
        let span_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "span",
            service,
            %span_id,
            parent_span_id = tracing::field::Empty
        );

        Arc::new(Self {
            span,
            span_id,
            finished: AtomicBool::new(false),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

impl Span for TracingSpan {
    fn child(&self, service: &str) -> Arc<dyn Span> {
        let span_id = Uuid::new_v4();
        let span = tracing::info_span!(
            parent: &self.span,
            "span",
            service,
            %span_id,
            parent_span_id = %self.span_id
        );

        Arc::new(Self {
            span,
            span_id,
            finished: AtomicBool::new(false),
        })
    }

    fn set_tags(&self, tags: &Tags) {
        tracing::debug!(parent: &self.span, ?tags, "Span tags");
    }

    fn audit(&self, message: &AuditMessage, action: AuditAction) {
        let payload = message
            .payload
            .as_ref()
            .map(|payload| payload.to_string())
            .unwrap_or_default();

        tracing::info!(
            parent: &self.span,
            %action,
            headers = ?message.headers,
            %payload,
            "Audit"
        );
    }

    fn error(&self, error: &ProtocolError) {
        tracing::error!(
            parent: &self.span,
            error_code = error.code.code(),
            %error,
            "Span error"
        );
    }

    fn finish(&self, status: SpanStatus) {
        if self.finished.swap(true, Ordering::SeqCst) {
            tracing::warn!(parent: &self.span, span_id = %self.span_id, "Span already finished");
            return;
        }

        tracing::debug!(parent: &self.span, %status, "Span finished");
    }
}
