//! GraphQL data type for chat users.

use juniper::ID;
use serde::{Deserialize, Serialize};

use crate::domains::chat::models::User;

/// GraphQL-friendly representation of a chat user
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(name = "User", description = "A chat participant")]
pub struct UserData {
    /// Unique identifier
    pub id: ID,

    /// Display name supplied at creation
    pub name: String,
}

impl From<User> for UserData {
    fn from(u: User) -> Self {
        Self {
            id: ID::new(u.id.to_string()),
            name: u.name,
        }
    }
}
