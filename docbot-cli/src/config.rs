//! Bot configuration: Telegram connectivity + conversion settings. Loaded from env.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use convert_handlers::RelaySettings;
use doc_convert::{ConverterSet, DEFAULT_DOCX_TO_PDF_COMMAND, DEFAULT_PDF_TO_DOCX_COMMAND};
use docbot_telegram::TelegramConfig;

const DEFAULT_CONVERT_TIMEOUT_SECS: u64 = 120;
/// Bot API getFile limit.
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 20;
const BYTES_PER_MB: u64 = 1024 * 1024;

/// Full application config.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// WORK_DIR: parent of per-request scratch directories; OS temp dir when unset.
    pub work_dir: Option<PathBuf>,
    /// CONVERT_TIMEOUT_SECS
    pub convert_timeout_secs: u64,
    /// MAX_FILE_SIZE_MB
    pub max_file_size_mb: u64,
    /// PDF_TO_DOCX_COMMAND
    pub pdf_to_docx_command: String,
    /// DOCX_TO_PDF_COMMAND
    pub docx_to_pdf_command: String,
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let work_dir = env::var("WORK_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let pdf_to_docx_command = env::var("PDF_TO_DOCX_COMMAND")
            .unwrap_or_else(|_| DEFAULT_PDF_TO_DOCX_COMMAND.to_string());
        let docx_to_pdf_command = env::var("DOCX_TO_PDF_COMMAND")
            .unwrap_or_else(|_| DEFAULT_DOCX_TO_PDF_COMMAND.to_string());

        Ok(Self {
            telegram,
            work_dir,
            convert_timeout_secs: env_u64("CONVERT_TIMEOUT_SECS", DEFAULT_CONVERT_TIMEOUT_SECS),
            max_file_size_mb: env_u64("MAX_FILE_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB),
            pdf_to_docx_command,
            docx_to_pdf_command,
        })
    }

    /// Validate config: Telegram settings, non-zero limits, parseable converter commands.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.convert_timeout_secs == 0 {
            anyhow::bail!("CONVERT_TIMEOUT_SECS must be greater than 0");
        }
        if self.max_file_size_mb == 0 {
            anyhow::bail!("MAX_FILE_SIZE_MB must be greater than 0");
        }
        if self.max_file_size_mb.checked_mul(BYTES_PER_MB).is_none() {
            anyhow::bail!("MAX_FILE_SIZE_MB is too large: {}", self.max_file_size_mb);
        }
        self.converters()?;
        Ok(())
    }

    /// Builds the external-process converters from the configured command templates.
    pub fn converters(&self) -> Result<ConverterSet> {
        ConverterSet::from_templates(&self.pdf_to_docx_command, &self.docx_to_pdf_command)
            .context("Invalid PDF_TO_DOCX_COMMAND or DOCX_TO_PDF_COMMAND")
    }

    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            work_dir: self.work_dir.clone(),
            timeout: Duration::from_secs(self.convert_timeout_secs),
            max_file_size: self.max_file_size_mb.saturating_mul(BYTES_PER_MB),
        }
    }
}
