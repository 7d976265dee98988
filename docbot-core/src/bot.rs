//! Bot abstraction for the four platform primitives the relay needs.
//!
//! [`Bot`] is transport-agnostic; docbot-telegram implements it via teloxide and tests substitute
//! a recording implementation.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Chat, Message};

/// Abstraction for sending text, fetching an uploaded document and sending a file back.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Resolves the platform file handle and writes its bytes to `destination`, overwriting it.
    /// Returns the number of bytes written.
    async fn download_document(&self, file_id: &str, destination: &Path) -> Result<u64>;

    /// Uploads the local file at `path` to the chat as a document named `file_name`.
    async fn send_document(&self, chat: &Chat, path: &Path, file_name: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::Utc;

    use crate::types::User;

    #[derive(Default)]
    struct TextOnlyBot {
        sent: Mutex<Vec<(i64, String)>>,
    }

    #[async_trait]
    impl Bot for TextOnlyBot {
        async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push((chat.id, text.to_string()));
            Ok(())
        }

        async fn download_document(&self, _file_id: &str, _destination: &Path) -> Result<u64> {
            Ok(0)
        }

        async fn send_document(&self, _chat: &Chat, _path: &Path, _file_name: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reply_to_sends_to_message_chat() {
        let bot = TextOnlyBot::default();
        let message = Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 42,
                chat_type: "private".to_string(),
            },
            content: "/start".to_string(),
            message_type: "text".to_string(),
            document: None,
            created_at: Utc::now(),
        };

        bot.reply_to(&message, "hi").await.unwrap();

        assert_eq!(*bot.sent.lock().unwrap(), vec![(42, "hi".to_string())]);
    }
}
