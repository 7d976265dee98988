//! Application context and entry points: builds the handler chain once and runs the REPL.

use std::sync::Arc;

use anyhow::Result;
use convert_handlers::{ConvertHandler, LoggingHandler, StartHandler};
use doc_convert::{CommandConverter, Conversion, ConverterSet};
use docbot_core::{init_tracing, Bot as CoreBot};
use docbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Everything the handlers need, constructed once at startup and injected by constructor.
pub struct AppContext {
    pub config: BotConfig,
    pub bot: Arc<dyn CoreBot>,
    pub converters: ConverterSet,
}

impl AppContext {
    /// Validates config and builds the external-process converters.
    pub fn new(config: BotConfig, bot: Arc<dyn CoreBot>) -> Result<Self> {
        config.validate()?;
        let converters = config.converters()?;
        Ok(Self::with_converters(config, bot, converters))
    }

    /// Uses the given converters instead of the configured commands (e.g. in tests).
    pub fn with_converters(config: BotConfig, bot: Arc<dyn CoreBot>, converters: ConverterSet) -> Self {
        Self {
            config,
            bot,
            converters,
        }
    }

    /// Logging → /start and /help → document relay.
    pub fn handler_chain(&self) -> HandlerChain {
        HandlerChain::new()
            .add_handler(Arc::new(LoggingHandler))
            .add_handler(Arc::new(StartHandler::new(
                self.bot.clone(),
                self.config.max_file_size_mb,
            )))
            .add_handler(Arc::new(ConvertHandler::new(
                self.bot.clone(),
                self.converters.clone(),
                self.config.relay_settings(),
            )))
    }
}

/// Main entry: validate config, init logging, build context and chain, then poll until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.telegram.log_file)?;

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let ctx = AppContext::new(config, bot)?;

    info!(
        work_dir = ?ctx.config.work_dir,
        convert_timeout_secs = ctx.config.convert_timeout_secs,
        max_file_size_mb = ctx.config.max_file_size_mb,
        pdf_to_docx = %ctx.config.pdf_to_docx_command,
        docx_to_pdf = %ctx.config.docx_to_pdf_command,
        "Bot started"
    );

    run_repl(teloxide_bot, ctx.handler_chain()).await
}

/// Prints where each converter program resolves; fails if any is missing.
pub fn check_converters(config: &BotConfig) -> Result<()> {
    config.validate()?;

    let mut missing = Vec::new();
    for conversion in Conversion::ALL {
        let template = match conversion {
            Conversion::PdfToDocx => &config.pdf_to_docx_command,
            Conversion::DocxToPdf => &config.docx_to_pdf_command,
        };
        let converter = CommandConverter::from_template(template)?;
        match converter.locate() {
            Some(path) => println!("{:<10} {} ({})", conversion.to_string(), converter.program(), path.display()),
            None => {
                println!("{:<10} {} (NOT FOUND)", conversion.to_string(), converter.program());
                missing.push(converter.program().to_string());
            }
        }
    }

    if !missing.is_empty() {
        anyhow::bail!("Converter programs not found on PATH: {}", missing.join(", "));
    }
    println!("All converters available.");
    Ok(())
}
