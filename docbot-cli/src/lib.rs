//! # docbot-cli
//!
//! Application edge: argument parsing, config loading, wiring the handler chain, running the bot.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{check_converters, run_bot, AppContext};
pub use cli::{Cli, Commands};
pub use config::BotConfig;
