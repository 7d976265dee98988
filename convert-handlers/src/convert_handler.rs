//! Document relay: download the upload, convert it, send the result back to the same chat.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use doc_convert::{Conversion, ConverterSet};
use docbot_core::{
    Bot as CoreBot, Chat, Handler, HandlerError, HandlerResponse, IncomingDocument, Message,
    Result,
};
use tempfile::TempDir;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::file_name::display_file_name;
use crate::messages;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Limits and storage for the relay.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    /// Parent of the per-request scratch directories; the OS temp dir when `None`.
    pub work_dir: Option<PathBuf>,
    /// Upper bound for one converter run.
    pub timeout: Duration,
    /// Documents larger than this (in bytes) are refused before download.
    pub max_file_size: u64,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            work_dir: None,
            timeout: Duration::from_secs(120),
            max_file_size: 20 * BYTES_PER_MB,
        }
    }
}

impl RelaySettings {
    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size / BYTES_PER_MB
    }
}

/// Converts uploaded `.pdf` files to `.docx` and `.docx` files to `.pdf`.
///
/// Routing looks at the declared name exactly as sent. Every request gets its own scratch
/// directory with fixed internal file names, so the declared name is never used as a storage
/// path and concurrent requests never collide; it is only sanitized for display and upload.
/// The directory is removed when the request ends, whatever the outcome. Failures are logged and
/// answered with a reply; the handler itself only errors if the chain should see it.
pub struct ConvertHandler {
    bot: Arc<dyn CoreBot>,
    converters: ConverterSet,
    settings: RelaySettings,
}

impl ConvertHandler {
    pub fn new(bot: Arc<dyn CoreBot>, converters: ConverterSet, settings: RelaySettings) -> Self {
        Self {
            bot,
            converters,
            settings,
        }
    }

    /// Creates the per-request scratch directory; the blocking part runs on the blocking pool.
    async fn scratch_dir(&self) -> std::io::Result<TempDir> {
        let work_dir = self.settings.work_dir.clone();
        if let Some(dir) = &work_dir {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::task::spawn_blocking(move || {
            let mut builder = tempfile::Builder::new();
            builder.prefix("docbot-");
            match work_dir {
                Some(dir) => builder.tempdir_in(dir),
                None => builder.tempdir(),
            }
        })
        .await
        .map_err(std::io::Error::other)?
    }

    /// Runs the relay inside a fresh scratch directory, then removes it on the blocking pool.
    async fn relay(
        &self,
        chat: &Chat,
        document: &IncomingDocument,
        conversion: Conversion,
        output_name: &str,
    ) -> std::result::Result<(), HandlerError> {
        let scratch = self
            .scratch_dir()
            .await
            .map_err(|e| HandlerError::Storage(e.to_string()))?;
        let result = self
            .relay_in(scratch.path(), chat, document, conversion, output_name)
            .await;

        let scratch_path = scratch.path().to_path_buf();
        match tokio::task::spawn_blocking(move || scratch.close()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(path = %scratch_path.display(), error = %e, "Failed to remove scratch dir")
            }
            Err(e) => {
                warn!(path = %scratch_path.display(), error = %e, "Scratch cleanup task failed")
            }
        }
        result
    }

    /// download → convert → upload inside `scratch`.
    async fn relay_in(
        &self,
        scratch: &Path,
        chat: &Chat,
        document: &IncomingDocument,
        conversion: Conversion,
        output_name: &str,
    ) -> std::result::Result<(), HandlerError> {
        let input = scratch.join(format!("source.{}", conversion.source().extension()));
        let output = scratch.join(format!("source.{}", conversion.target().extension()));

        let bytes = self
            .bot
            .download_document(&document.file_id, &input)
            .await
            .map_err(|e| HandlerError::Download(e.to_string()))?;
        debug!(bytes = bytes, path = %input.display(), "Document downloaded");

        let converter = self.converters.get(conversion);
        match tokio::time::timeout(self.settings.timeout, converter.convert(&input, &output)).await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(HandlerError::Conversion(e.to_string())),
            Err(_) => return Err(HandlerError::Timeout(self.settings.timeout.as_secs())),
        }

        self.bot
            .send_document(chat, &output, output_name)
            .await
            .map_err(|e| HandlerError::Upload(e.to_string()))?;
        Ok(())
    }

    /// Sends a text reply and stops the chain; a failed send is only logged.
    async fn send_and_stop(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.reply_to(message, text).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send reply");
        }
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for ConvertHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(document) = message.document.as_ref() else {
            return Ok(HandlerResponse::Continue);
        };

        let routed = document.file_name.as_deref().and_then(|declared| {
            Conversion::from_file_name(declared)
                .map(|conversion| (display_file_name(declared, conversion), conversion))
        });
        let Some((file_name, conversion)) = routed else {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                declared_name = ?document.file_name,
                "Unsupported document format"
            );
            return self
                .send_and_stop(message, messages::UNSUPPORTED_FORMAT)
                .await;
        };

        if document.file_size > self.settings.max_file_size {
            warn!(
                user_id = message.user.id,
                file_name = %file_name,
                file_size = document.file_size,
                max_file_size = self.settings.max_file_size,
                "Document too large"
            );
            let text = messages::too_large(self.settings.max_file_size_mb());
            return self.send_and_stop(message, &text).await;
        }

        let request_id = Uuid::new_v4();
        let output_name = conversion.output_file_name(&file_name);
        info!(
            request_id = %request_id,
            user_id = message.user.id,
            chat_id = message.chat.id,
            file_name = %file_name,
            conversion = %conversion,
            "Starting conversion"
        );

        let progress = messages::converting(&file_name, conversion);
        if let Err(e) = self.bot.reply_to(message, &progress).await {
            warn!(request_id = %request_id, error = %e, "Failed to send progress message");
        }

        let started = Instant::now();
        match self
            .relay(&message.chat, document, conversion, &output_name)
            .await
        {
            Ok(()) => {
                info!(
                    request_id = %request_id,
                    chat_id = message.chat.id,
                    output_name = %output_name,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Converted document sent"
                );
                Ok(HandlerResponse::Stop)
            }
            Err(e) => {
                error!(
                    request_id = %request_id,
                    chat_id = message.chat.id,
                    conversion = %conversion,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "Conversion relay failed"
                );
                self.send_and_stop(message, messages::failure(&e)).await
            }
        }
    }
}
