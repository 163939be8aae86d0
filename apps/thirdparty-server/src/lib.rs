#![cfg_attr(feature = "strict", deny(warnings))]

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod consumer;
pub mod dto;
pub mod endpoint;
pub mod metrics;
pub mod router;
pub mod build_info {
    pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
    pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const COMMIT_HASH: Option<&str> = option_env!("GIT_COMMIT_HASH");
    pub const PIPELINE_ID: Option<&str> = option_env!("CI_PIPELINE_ID");
}
mod middleware;

pub const DEFAULT_SERVER_PORT: u16 = 3008;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    /// event bus connection; notifications are not consumed when unset
    pub nats_url: Option<String>,
    pub notification_subject: String,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_ip: None,
            server_port: None,
            trace_json: None,
            trace_level: None,
            sentry_dsn: None,
            sentry_environment: None,
            nats_url: None,
            notification_subject: "topic-notification-event".to_owned(),
            enable_metrics: true,
            enable_server_info: true,
        }
    }
}
