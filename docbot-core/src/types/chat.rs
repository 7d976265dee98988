//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Conversation that replies are sent to (private chat, group or channel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
