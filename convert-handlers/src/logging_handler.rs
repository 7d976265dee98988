//! Logs each message in before() and the response in after(); always continues.

use async_trait::async_trait;
use docbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let document = message.document.as_ref();
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_id = message.chat.id,
            message_type = %message.message_type,
            file_name = ?document.and_then(|d| d.file_name.as_deref()),
            file_size = ?document.map(|d| d.file_size),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use docbot_core::{Chat, User};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn text_message() -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 9,
                chat_type: "private".to_string(),
            },
            content: "hi".to_string(),
            message_type: "text".to_string(),
            document: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_each_message_is_logged_once() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let message = text_message();
        let handler = LoggingHandler;
        assert!(handler.before(&message).await.unwrap());
        handler
            .after(&message, &HandlerResponse::Continue)
            .await
            .unwrap();

        let text = logs.text();
        assert_eq!(text.matches("Received message").count(), 1, "{text}");
        assert_eq!(text.matches("Processed message").count(), 1, "{text}");
    }
}
