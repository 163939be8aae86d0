use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One bus delivery: a single message or a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventMessages {
    Many(Vec<EventMessage>),
    One(Box<EventMessage>),
}

impl EventMessages {
    pub fn into_vec(self) -> Vec<EventMessage> {
        match self {
            EventMessages::Many(messages) => messages,
            EventMessages::One(message) => vec![*message],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
    pub value: EventMessageValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMessageValue {
    pub from: String,
    pub to: String,
    pub id: String,
    pub content: EventContent,
    pub metadata: EventMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_params: Option<serde_json::Value>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Either a `data:...;base64,` URI, a JSON string or an inline object.
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub event: EventDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    #[serde(rename = "type")]
    pub r#type: String,
    pub action: String,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
