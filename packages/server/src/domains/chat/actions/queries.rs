//! Read-side queries against the chat store

use crate::common::UserId;
use crate::domains::chat::models::{Message, User};
use crate::domains::chat::store::ChatStore;

/// All messages in insertion order.
pub async fn messages(store: &ChatStore) -> Vec<Message> {
    store.messages().await
}

/// Resolve a message author against the current user collection.
///
/// Returns None if no user matches; with the referential check on
/// `add_message` and no user deletion this cannot happen in practice.
pub async fn find_author(user_id: UserId, store: &ChatStore) -> Option<User> {
    store.find_user(user_id).await
}
