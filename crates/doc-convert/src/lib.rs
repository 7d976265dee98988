//! # doc-convert
//!
//! Routes document names to a [`Conversion`] and runs the matching [`Converter`].
//! The shipped converters are external programs ([`CommandConverter`]); the conversion
//! algorithms themselves are not implemented here.

mod command;
mod converter;
mod error;
mod format;

pub use command::{CommandConverter, DEFAULT_DOCX_TO_PDF_COMMAND, DEFAULT_PDF_TO_DOCX_COMMAND};
pub use converter::{Converter, ConverterSet};
pub use error::ConvertError;
pub use format::{Conversion, DocumentFormat};
