//! Typed ID definitions for the chat domain entities.
//!
//! Each entity gets a marker type and an `Id` alias, providing compile-time
//! type safety for ID usage throughout the application.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (chat participants).
pub struct User;

/// Marker type for Message entities.
pub struct Message;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Message entities.
pub type MessageId = Id<Message>;
