//! Integration tests for the GraphQL contract, executed against the schema
//! with an isolated store per test.

use juniper::{execute, InputValue, Variables};

use chat_core::domains::chat::ChatStore;
use chat_core::kernel::EventBus;
use chat_core::server::graphql::{create_schema, GraphQLContext, Schema};

fn setup() -> (Schema, GraphQLContext) {
    let context = GraphQLContext::new(ChatStore::new(), EventBus::new());
    (create_schema(), context)
}

/// Run an operation and return (data, errors) as plain JSON.
async fn run(
    schema: &Schema,
    ctx: &GraphQLContext,
    source: &str,
    vars: Variables,
) -> (serde_json::Value, serde_json::Value) {
    let (data, errors) = execute(source, None, schema, &vars, ctx).await.unwrap();
    (
        serde_json::to_value(&data).unwrap(),
        serde_json::to_value(&errors).unwrap(),
    )
}

#[tokio::test]
async fn messages_query_starts_empty() {
    let (schema, ctx) = setup();

    let (data, errors) = run(&schema, &ctx, "{ messages { id text } }", Variables::new()).await;

    assert_eq!(errors.as_array().unwrap().len(), 0);
    assert_eq!(data["messages"], serde_json::json!([]));
}

#[tokio::test]
async fn add_user_returns_the_created_user() {
    let (schema, ctx) = setup();

    let mut vars = Variables::new();
    vars.insert("name".to_string(), InputValue::scalar("Ann"));

    let (data, errors) = run(
        &schema,
        &ctx,
        "mutation AddUser($name: String!) { addUser(name: $name) { id name } }",
        vars,
    )
    .await;

    assert_eq!(errors.as_array().unwrap().len(), 0);
    assert_eq!(data["addUser"]["name"], "Ann");
    assert!(!data["addUser"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn add_message_appears_in_messages_with_resolved_author() {
    let (schema, ctx) = setup();

    let mut vars = Variables::new();
    vars.insert("name".to_string(), InputValue::scalar("Ann"));
    let (data, _) = run(
        &schema,
        &ctx,
        "mutation AddUser($name: String!) { addUser(name: $name) { id } }",
        vars,
    )
    .await;
    let user_id = data["addUser"]["id"].as_str().unwrap().to_string();

    let mut vars = Variables::new();
    vars.insert("userId".to_string(), InputValue::scalar(user_id.clone()));
    vars.insert("text".to_string(), InputValue::scalar("hello"));
    let (data, errors) = run(
        &schema,
        &ctx,
        "mutation AddMessage($userId: ID!, $text: String!) { \
            addMessage(userId: $userId, text: $text) { id text } \
         }",
        vars,
    )
    .await;

    assert_eq!(errors.as_array().unwrap().len(), 0);
    assert_eq!(data["addMessage"]["text"], "hello");
    let message_id = data["addMessage"]["id"].as_str().unwrap().to_string();

    let (data, errors) = run(
        &schema,
        &ctx,
        "{ messages { id text author { id name } } }",
        Variables::new(),
    )
    .await;

    assert_eq!(errors.as_array().unwrap().len(), 0);
    let messages = data["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["id"], serde_json::json!(message_id));
    assert_eq!(messages[0]["text"], "hello");
    assert_eq!(messages[0]["author"]["id"], serde_json::json!(user_id));
    assert_eq!(messages[0]["author"]["name"], "Ann");
}

#[tokio::test]
async fn add_message_for_unknown_user_surfaces_the_integrity_error() {
    let (schema, ctx) = setup();

    let mut vars = Variables::new();
    vars.insert("userId".to_string(), InputValue::scalar("bogus"));
    vars.insert("text".to_string(), InputValue::scalar("x"));
    let (data, errors) = run(
        &schema,
        &ctx,
        "mutation AddMessage($userId: ID!, $text: String!) { \
            addMessage(userId: $userId, text: $text) { id } \
         }",
        vars,
    )
    .await;

    let errors = errors.as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0]["message"],
        "Can't add message. userId not found. Please add user before"
    );
    assert_eq!(data["addMessage"], serde_json::Value::Null);

    // No partial state was committed
    let (data, _) = run(&schema, &ctx, "{ messages { id } }", Variables::new()).await;
    assert_eq!(data["messages"], serde_json::json!([]));
}

#[tokio::test]
async fn messages_query_is_order_stable_across_reads() {
    let (schema, ctx) = setup();

    let mut vars = Variables::new();
    vars.insert("name".to_string(), InputValue::scalar("Ann"));
    let (data, _) = run(
        &schema,
        &ctx,
        "mutation AddUser($name: String!) { addUser(name: $name) { id } }",
        vars,
    )
    .await;
    let user_id = data["addUser"]["id"].as_str().unwrap().to_string();

    for text in ["first", "second", "third"] {
        let mut vars = Variables::new();
        vars.insert("userId".to_string(), InputValue::scalar(user_id.clone()));
        vars.insert("text".to_string(), InputValue::scalar(text));
        run(
            &schema,
            &ctx,
            "mutation AddMessage($userId: ID!, $text: String!) { \
                addMessage(userId: $userId, text: $text) { id } \
             }",
            vars,
        )
        .await;
    }

    let (first, _) = run(&schema, &ctx, "{ messages { id text } }", Variables::new()).await;
    let (second, _) = run(&schema, &ctx, "{ messages { id text } }", Variables::new()).await;

    let texts: Vec<_> = first["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn schema_exposes_mutation_and_subscription_roots() {
    let (schema, ctx) = setup();

    let (data, errors) = run(
        &schema,
        &ctx,
        "{ __schema { mutationType { name } subscriptionType { name } } }",
        Variables::new(),
    )
    .await;

    assert_eq!(errors.as_array().unwrap().len(), 0);
    assert_eq!(data["__schema"]["mutationType"]["name"], "Mutation");
    assert_eq!(data["__schema"]["subscriptionType"]["name"], "Subscription");
}
