//! Add message action - validates the author reference and appends a message

use anyhow::Result;
use tracing::info;

use crate::common::UserId;
use crate::domains::chat::errors::ChatError;
use crate::domains::chat::events::ChatEvent;
use crate::domains::chat::models::Message;
use crate::domains::chat::store::ChatStore;

/// Create a message for an existing user.
///
/// Returns (Message, ChatEvent::MessageAdded). The caller publishes the
/// event; on failure nothing is appended and no event is returned.
///
/// `user_id` is opaque to callers: a string that is not a well-formed id
/// cannot reference any user and fails the same way as an unknown one.
pub async fn add_message(user_id: &str, text: String, store: &ChatStore) -> Result<(Message, ChatEvent)> {
    info!(user_id = %user_id, "Creating message");

    let user_id = UserId::parse(user_id).map_err(|_| ChatError::UserNotFound {
        user_id: user_id.to_string(),
    })?;

    let message = store.add_message(user_id, text).await?;

    let event = ChatEvent::MessageAdded {
        message: message.clone(),
    };

    Ok((message, event))
}
