//! `/start` and `/help` commands.

use std::sync::Arc;

use async_trait::async_trait;
use docbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use crate::messages;

/// Replies to `/start` with the greeting and to `/help` with usage; other messages pass through.
/// Commands only count in text messages: a document captioned `/start` is still converted.
pub struct StartHandler {
    bot: Arc<dyn CoreBot>,
    max_file_size_mb: u64,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn CoreBot>, max_file_size_mb: u64) -> Self {
        Self {
            bot,
            max_file_size_mb,
        }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.document.is_some() {
            return Ok(HandlerResponse::Continue);
        }
        let reply = match message.command() {
            Some("start") => messages::GREETING.to_string(),
            Some("help") => messages::help(self.max_file_size_mb),
            _ => return Ok(HandlerResponse::Continue),
        };

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            command = ?message.command(),
            "Answering command"
        );
        if let Err(e) = self.bot.reply_to(message, &reply).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send command reply");
        }
        Ok(HandlerResponse::Stop)
    }
}
