use thiserror::Error;

/// Chat domain errors
#[derive(Error, Debug)]
pub enum ChatError {
    /// Referential integrity: a message must reference an existing user.
    /// The requested id is kept for diagnostics; the display string is the
    /// API-facing error message.
    #[error("Can't add message. userId not found. Please add user before")]
    UserNotFound { user_id: String },
}
