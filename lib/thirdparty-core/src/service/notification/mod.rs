use std::sync::Arc;

use super::forward::ForwardService;
use crate::config::core_config::NotificationConfig;
use crate::model::participant::ParticipantId;

pub mod dto;
pub mod mapper;
pub mod service;


/// Turns committed ledger notifications into transaction request callbacks
/// addressed to the configured PISP.
#[derive(Clone)]
pub struct NotificationService {
    forward_service: Arc<ForwardService>,
    hub_name: ParticipantId,
    config: NotificationConfig,
}

impl NotificationService {
    pub fn new(
        forward_service: Arc<ForwardService>,
        hub_name: ParticipantId,
        config: NotificationConfig,
    ) -> Self {
        Self {
            forward_service,
            hub_name,
            config,
        }
    }
}
