//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, document::IncomingDocument, user::User};

/// A single incoming message: text or caption in `content`, optional document attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// `text`, `document` or `other`.
    pub message_type: String,
    pub document: Option<IncomingDocument>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns the bot command name if `content` starts with one.
    ///
    /// `/start`, `/start@my_bot` and `/start payload` all yield `Some("start")`.
    pub fn command(&self) -> Option<&str> {
        let first = self.content.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
