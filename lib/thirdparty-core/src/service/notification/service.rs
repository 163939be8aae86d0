use std::sync::Arc;

use futures::future::join_all;

use super::NotificationService;
use super::dto::{EventMessage, EventMessages};
use super::mapper::{callback_request, rewrite_envelope};
use crate::model::participant::ParticipantId;
use crate::provider::span::Span;
use crate::service::error::ServiceError;
use crate::service::forward::resource::THIRDPARTY_TRANSACTIONS;

impl NotificationService {
    /// Delivers a callback for every matching message of the batch and
    /// returns how many were delivered. A failing message is logged and does
    /// not affect the others. The PISP and transaction request settings are
    /// only required once a message matches.
    pub async fn handle(
        &self,
        messages: EventMessages,
        parent_span: Option<Arc<dyn Span>>,
    ) -> Result<usize, ServiceError> {
        let messages: Vec<EventMessage> = messages
            .into_vec()
            .into_iter()
            .filter(|message| self.is_handled(message))
            .collect();

        if messages.is_empty() {
            tracing::debug!("No notification to deliver");
            return Ok(0);
        }

        let pisp_id = self
            .config
            .pisp_id
            .as_ref()
            .ok_or(ServiceError::MissingConfig("notification.pispId"))?;
        let transaction_request_id = self
            .config
            .transaction_request_id
            .as_deref()
            .ok_or(ServiceError::MissingConfig("notification.transactionRequestId"))?;

        let results = join_all(messages.into_iter().map(|message| {
            self.deliver(message, pisp_id, transaction_request_id, parent_span.clone())
        }))
        .await;

        let mut delivered = 0;
        for result in results {
            match result {
                Ok(()) => delivered += 1,
                Err(error) => {
                    tracing::error!(%error, "Failed to deliver notification callback")
                }
            }
        }

        tracing::info!(delivered, %pisp_id, "Notification callbacks delivered");
        Ok(delivered)
    }

    fn is_handled(&self, message: &EventMessage) -> bool {
        let event = &message.value.metadata.event;
        let handled = event.r#type == self.config.event_type
            && event.action == self.config.event_action;

        if !handled {
            tracing::debug!(
                event_type = %event.r#type,
                event_action = %event.action,
                "Ignoring notification"
            );
        }
        handled
    }

    async fn deliver(
        &self,
        mut message: EventMessage,
        pisp_id: &ParticipantId,
        transaction_request_id: &str,
        parent_span: Option<Arc<dyn Span>>,
    ) -> Result<(), ServiceError> {
        rewrite_envelope(
            &mut message.value,
            &self.hub_name,
            pisp_id,
            transaction_request_id,
        );
        tracing::debug!(
            from = %message.value.from,
            to = %message.value.to,
            id = %message.value.id,
            "Notification readdressed"
        );

        let request = callback_request(message.value)?;
        self.forward_service
            .forward_from_hub(&THIRDPARTY_TRANSACTIONS, request, parent_span)
            .await
    }
}
