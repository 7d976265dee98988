//! Converter trait and the per-direction converter registry.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::command::CommandConverter;
use crate::error::ConvertError;
use crate::format::Conversion;

/// Converts the file at `input` and writes the result to `output`.
///
/// Implementations must either leave a complete file at `output` and return `Ok`, or return an
/// error. Dropping the returned future cancels the conversion.
#[async_trait]
pub trait Converter: Send + Sync {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError>;
}

/// One converter per [`Conversion`] direction.
#[derive(Clone)]
pub struct ConverterSet {
    pdf_to_docx: Arc<dyn Converter>,
    docx_to_pdf: Arc<dyn Converter>,
}

impl ConverterSet {
    pub fn new(pdf_to_docx: Arc<dyn Converter>, docx_to_pdf: Arc<dyn Converter>) -> Self {
        Self {
            pdf_to_docx,
            docx_to_pdf,
        }
    }

    /// Builds external-process converters from command templates (see [`CommandConverter::from_template`]).
    pub fn from_templates(pdf_to_docx: &str, docx_to_pdf: &str) -> Result<Self, ConvertError> {
        Ok(Self::new(
            Arc::new(CommandConverter::from_template(pdf_to_docx)?),
            Arc::new(CommandConverter::from_template(docx_to_pdf)?),
        ))
    }

    pub fn get(&self, conversion: Conversion) -> &Arc<dyn Converter> {
        match conversion {
            Conversion::PdfToDocx => &self.pdf_to_docx,
            Conversion::DocxToPdf => &self.docx_to_pdf,
        }
    }
}
