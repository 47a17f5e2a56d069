//! In-memory chat store.
//!
//! Owns the two process-local collections (users, messages) as
//! insertion-ordered maps keyed by id. The store is injected into request
//! handlers through the GraphQL context instead of living as module state,
//! so every test gets an isolated instance.
//!
//! Both collections are append-only: no update or delete operations exist.
//! The referential check in [`ChatStore::add_message`] runs under the same
//! write lock that performs the append, and users are never removed, so a
//! message's `user_id` stays resolvable for the process lifetime.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::common::{MessageId, UserId};
use crate::domains::chat::errors::ChatError;
use crate::domains::chat::models::{Message, User};

/// Thread-safe, cloneable handle to the in-memory chat state.
#[derive(Clone, Default)]
pub struct ChatStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    users: IndexMap<UserId, User>,
    messages: IndexMap<MessageId, Message>,
}

impl ChatStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new user and return the created record.
    ///
    /// The schema marks `name` required; an empty string is not rejected
    /// beyond that.
    pub async fn add_user(&self, name: String) -> User {
        let user = User::new(name);
        let mut inner = self.inner.write().await;
        inner.users.insert(user.id, user.clone());
        user
    }

    /// Append a new message and return the created record.
    ///
    /// Fails if `user_id` does not reference an existing user; in that case
    /// the message collection is left untouched.
    pub async fn add_message(&self, user_id: UserId, text: String) -> Result<Message, ChatError> {
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&user_id) {
            return Err(ChatError::UserNotFound {
                user_id: user_id.to_string(),
            });
        }

        let message = Message::new(user_id, text);
        inner.messages.insert(message.id, message.clone());
        Ok(message)
    }

    /// All messages in insertion order. No pagination, filtering, or limit.
    pub async fn messages(&self) -> Vec<Message> {
        let inner = self.inner.read().await;
        inner.messages.values().cloned().collect()
    }

    /// Look up a user by id.
    pub async fn find_user(&self, user_id: UserId) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.get(&user_id).cloned()
    }

    /// Number of users (health reporting).
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Number of messages (health reporting).
    pub async fn message_count(&self) -> usize {
        self.inner.read().await.messages.len()
    }
}
