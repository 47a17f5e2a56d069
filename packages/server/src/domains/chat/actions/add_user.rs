//! Add user action - appends a user to the store

use anyhow::Result;
use tracing::info;

use crate::domains::chat::models::User;
use crate::domains::chat::store::ChatStore;

/// Create a user.
///
/// No error conditions and no event emitted; the addition is durable for
/// the process lifetime.
pub async fn add_user(name: String, store: &ChatStore) -> Result<User> {
    info!(name = %name, "Creating user");

    let user = store.add_user(name).await;
    Ok(user)
}
