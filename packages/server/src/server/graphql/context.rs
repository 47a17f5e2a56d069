use crate::domains::chat::events::ChatEvent;
use crate::domains::chat::store::ChatStore;
use crate::kernel::EventBus;

/// GraphQL request context
///
/// Contains shared resources available to all resolvers. Constructed
/// per-request by middleware and per-connection for WebSocket
/// subscriptions; both hand out handles to the same store and bus.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: ChatStore,
    pub event_bus: EventBus,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(store: ChatStore, event_bus: EventBus) -> Self {
        Self { store, event_bus }
    }

    /// Publish a domain event to its bus topic.
    pub async fn publish(&self, event: ChatEvent) {
        self.event_bus
            .publish(event.topic(), event.into_payload())
            .await;
    }
}
