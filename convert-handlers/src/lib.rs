//! # Handlers for the document conversion bot
//!
//! [`StartHandler`] answers `/start` and `/help`, [`ConvertHandler`] relays uploaded PDF/DOCX
//! documents through a converter and sends the result back, [`LoggingHandler`] logs every message.

mod convert_handler;
mod file_name;
mod logging_handler;
pub mod messages;
mod start_handler;

pub use convert_handler::{ConvertHandler, RelaySettings};
pub use file_name::{display_file_name, sanitize_file_name};
pub use logging_handler::LoggingHandler;
pub use start_handler::StartHandler;
