//! Chat domain events.
//!
//! Events are immutable facts about what happened. Actions return them
//! alongside the created record; resolvers publish them to the event bus,
//! so a failed action has no event to publish.

use serde::{Deserialize, Serialize};

use crate::domains::chat::data::MessageData;
use crate::domains::chat::models::Message;

/// Bus topic carrying new-message events.
pub const CHAT_MESSAGES_TOPIC: &str = "chat:messages";

/// Chat domain events - immutable facts
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// Message was accepted into the store.
    /// Adding a user emits no event.
    MessageAdded { message: Message },
}

/// Serializable format for chat events published to the bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEventPayload {
    /// Message was accepted into the store
    MessageAdded { message: MessageData },
}

impl ChatEvent {
    /// Bus topic this event is published on.
    pub fn topic(&self) -> &'static str {
        match self {
            ChatEvent::MessageAdded { .. } => CHAT_MESSAGES_TOPIC,
        }
    }

    /// Serialize to the bus payload format.
    pub fn into_payload(&self) -> serde_json::Value {
        match self {
            ChatEvent::MessageAdded { message } => {
                serde_json::to_value(ChatEventPayload::MessageAdded {
                    message: MessageData::from(message.clone()),
                })
                .unwrap_or_default()
            }
        }
    }
}
