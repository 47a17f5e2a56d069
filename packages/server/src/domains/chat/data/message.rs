//! GraphQL data type for chat messages.
//!
//! The GraphQL field resolvers (including the lazy `author` lookup) live in
//! `server::graphql::schema`, next to the context they need.

use juniper::ID;
use serde::{Deserialize, Serialize};

use crate::domains::chat::models::Message;

/// GraphQL-friendly representation of a chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageData {
    /// Unique identifier
    pub id: ID,

    /// Author reference, resolved to a User at read time
    pub user_id: ID,

    /// Message content
    pub text: String,
}

impl From<Message> for MessageData {
    fn from(m: Message) -> Self {
        Self {
            id: ID::new(m.id.to_string()),
            user_id: ID::new(m.user_id.to_string()),
            text: m.text,
        }
    }
}
