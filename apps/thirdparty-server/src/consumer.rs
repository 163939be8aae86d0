use std::sync::Arc;

use futures::StreamExt;
use thirdparty_core::model::protocol_error::ProtocolError;
use thirdparty_core::provider::span::tracing_span::TracingSpan;
use thirdparty_core::provider::span::{Span, SpanStatus};
use thirdparty_core::service::notification::NotificationService;
use thirdparty_core::service::notification::dto::EventMessages;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Subscribes to the notification subject and feeds every message to the
/// notification service in a background task.
pub async fn start_notification_consumer(
    nats_url: &str,
    subject: &str,
    service: Arc<NotificationService>,
) -> anyhow::Result<JoinHandle<()>> {
    let client = async_nats::connect(nats_url).await?;
    info!(%nats_url, "Connected to event bus");

    let mut subscriber = client.subscribe(subject.to_owned()).await?;
    info!(%subject, "Subscribed to notifications");

    Ok(tokio::spawn(async move {
        while let Some(message) = subscriber.next().await {
            handle_notification_payload(&service, &message.payload).await;
        }
        warn!("Notification subscription closed");
    }))
}

/// Handles one raw bus payload. Malformed payloads are dropped.
pub async fn handle_notification_payload(service: &NotificationService, payload: &[u8]) {
    let messages = match serde_json::from_slice::<EventMessages>(payload) {
        Ok(messages) => messages,
        Err(error) => {
            warn!(%error, "Dropping malformed notification");
            return;
        }
    };

    let span: Arc<dyn Span> = TracingSpan::root("thirdparty-notification");
    match service.handle(messages, Some(span.clone())).await {
        Ok(delivered) => {
            debug!(delivered, "Notification batch handled");
            span.finish(SpanStatus::Success);
        }
        Err(error) => {
            let error = ProtocolError::from(error);
            error!(%error, "Notification batch failed");
            span.error(&error);
            span.finish(SpanStatus::Error);
        }
    }
}
