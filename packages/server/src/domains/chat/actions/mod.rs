// Chat domain actions

pub mod add_message;
pub mod add_user;
pub mod queries;

pub use add_message::add_message;
pub use add_user::add_user;
pub use queries::{find_author, messages};
