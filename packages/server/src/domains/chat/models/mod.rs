use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{MessageId, UserId};

/// User - a chat participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Construct a new user record with a fresh id.
    pub fn new(name: String) -> Self {
        Self {
            id: UserId::new(),
            name,
            created_at: Utc::now(),
        }
    }
}

/// Message - a chat message referencing its author by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub user_id: UserId, // must reference an existing User at creation time
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Construct a new message record with a fresh id.
    pub fn new(user_id: UserId, text: String) -> Self {
        Self {
            id: MessageId::new(),
            user_id,
            text,
            created_at: Utc::now(),
        }
    }
}
