//! # docbot-core
//!
//! Core types and traits for the document conversion bot: [`Bot`], [`Handler`], message, chat and
//! document types, errors, and tracing initialization. Transport-agnostic; used by docbot-telegram,
//! handler-chain and convert-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, IncomingDocument, Message, ToCoreMessage, ToCoreUser, User,
};
