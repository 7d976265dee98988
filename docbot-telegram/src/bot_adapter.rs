//! Wraps teloxide::Bot and implements [`docbot_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use std::path::Path;

use async_trait::async_trait;
use docbot_core::{Bot as CoreBot, Chat, DbotError, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_document(&self, file_id: &str, destination: &Path) -> Result<u64> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        debug!(file_path = %file.path, size = file.meta.size, "Resolved download handle");

        let mut dst = tokio::fs::File::create(destination).await?;
        self.bot
            .download_file(&file.path, &mut dst)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        dst.flush().await?;

        Ok(tokio::fs::metadata(destination).await?.len())
    }

    async fn send_document(&self, chat: &Chat, path: &Path, file_name: &str) -> Result<()> {
        let document = InputFile::file(path.to_path_buf()).file_name(file_name.to_string());
        self.bot
            .send_document(ChatId(chat.id), document)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
