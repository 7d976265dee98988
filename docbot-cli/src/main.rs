//! docbot: Telegram bot that converts uploaded PDF files to DOCX and DOCX files to PDF.

use anyhow::Result;
use clap::Parser;
use docbot_cli::{check_converters, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Check => {
            let config = BotConfig::load(None)?;
            check_converters(&config)
        }
    }
}
