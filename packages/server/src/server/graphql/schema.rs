//! GraphQL schema definition.
//!
//! The exposed contract:
//!
//! ```graphql
//! type User    { id: ID!, name: String! }
//! type Message { id: ID!, text: String!, author: User! }
//! type Query        { messages: [Message!]! }
//! type Mutation     { addMessage(userId: ID!, text: String!): Message!
//!                     addUser(name: String!): User! }
//! type Subscription { messageAdded: Message }
//! ```

use std::pin::Pin;

use futures::{Stream, StreamExt};
use juniper::{FieldError, FieldResult, RootNode, ID};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tracing::warn;

use super::context::GraphQLContext;

// Domain actions
use crate::domains::chat::actions as chat_actions;

// Domain data types (GraphQL types)
use crate::domains::chat::data::{MessageData, UserData};
use crate::domains::chat::events::{ChatEventPayload, CHAT_MESSAGES_TOPIC};

use crate::common::UserId;

/// Convert anyhow::Error to juniper FieldError for thin resolvers
fn to_field_error(e: anyhow::Error) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

#[juniper::graphql_object(
    context = GraphQLContext,
    name = "Message",
    description = "A chat message"
)]
impl MessageData {
    /// Unique identifier
    fn id(&self) -> &ID {
        &self.id
    }

    /// Message content
    fn text(&self) -> &str {
        &self.text
    }

    /// The user who wrote this message.
    ///
    /// Resolved lazily against the current user collection at read time.
    async fn author(&self, ctx: &GraphQLContext) -> FieldResult<UserData> {
        let user_id = UserId::parse(&self.user_id).map_err(|_| {
            FieldError::new("Author not found", juniper::Value::null())
        })?;

        let user = chat_actions::find_author(user_id, &ctx.store)
            .await
            .ok_or_else(|| FieldError::new("Author not found", juniper::Value::null()))?;

        Ok(UserData::from(user))
    }
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Get all messages in insertion order
    async fn messages(ctx: &GraphQLContext) -> FieldResult<Vec<MessageData>> {
        let messages = chat_actions::messages(&ctx.store).await;
        Ok(messages.into_iter().map(MessageData::from).collect())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Create a message for an existing user.
    ///
    /// Fails if userId does not reference a user; nothing is stored and no
    /// event is published in that case.
    async fn add_message(ctx: &GraphQLContext, user_id: ID, text: String) -> FieldResult<MessageData> {
        let (message, event) = chat_actions::add_message(&user_id, text, &ctx.store)
            .await
            .map_err(to_field_error)?;

        ctx.publish(event).await;

        Ok(MessageData::from(message))
    }

    /// Create a user
    async fn add_user(ctx: &GraphQLContext, name: String) -> FieldResult<UserData> {
        let user = chat_actions::add_user(name, &ctx.store)
            .await
            .map_err(to_field_error)?;

        Ok(UserData::from(user))
    }
}

type MessageStream = Pin<Box<dyn Stream<Item = Result<Option<MessageData>, FieldError>> + Send>>;

pub struct Subscription;

#[juniper::graphql_subscription(context = GraphQLContext)]
impl Subscription {
    /// Live feed of new messages.
    ///
    /// Each successful addMessage yields exactly one event to every
    /// subscriber attached at publish time. No history is replayed.
    async fn message_added(ctx: &GraphQLContext) -> MessageStream {
        let rx = ctx.event_bus.subscribe(CHAT_MESSAGES_TOPIC).await;

        let stream = BroadcastStream::new(rx).filter_map(|event| async move {
            match event {
                Ok(value) => match serde_json::from_value::<ChatEventPayload>(value) {
                    Ok(ChatEventPayload::MessageAdded { message }) => Some(Ok(Some(message))),
                    Err(e) => {
                        warn!(error = %e, "Dropping malformed chat event payload");
                        None
                    }
                },
                // A lagged subscriber misses events rather than seeing stale ones
                Err(BroadcastStreamRecvError::Lagged(missed)) => {
                    warn!(missed = missed, "Subscription lagged behind the event bus");
                    None
                }
            }
        });

        Box::pin(stream)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, Subscription>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, Subscription)
}
