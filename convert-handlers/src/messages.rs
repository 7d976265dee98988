//! User-facing reply texts.

use doc_convert::Conversion;
use docbot_core::HandlerError;

pub const GREETING: &str = "Hello, I am alive ✅\nSend me a PDF or Word file to convert.";
pub const UNSUPPORTED_FORMAT: &str = "❌ Only PDF and DOCX supported.";

pub const MSG_DOWNLOAD_FAILED: &str = "⚠️ Could not download the file. Please try again.";
pub const MSG_CONVERSION_FAILED: &str =
    "⚠️ Conversion failed. The file may be damaged or unsupported.";
pub const MSG_TIMEOUT: &str = "⌛ Conversion timed out. Try a smaller file.";
pub const MSG_UPLOAD_FAILED: &str = "⚠️ Could not send the converted file.";
pub const MSG_INTERNAL: &str = "⚠️ Something went wrong. Please try again.";

/// Usage text for `/help`.
pub fn help(max_file_size_mb: u64) -> String {
    format!(
        "Send me a document and I will convert it:\n\
         • .pdf → .docx\n\
         • .docx → .pdf\n\
         Files up to {} MB are accepted.",
        max_file_size_mb
    )
}

pub fn too_large(max_file_size_mb: u64) -> String {
    format!("❌ File is too large (max {} MB).", max_file_size_mb)
}

pub fn converting(file_name: &str, conversion: Conversion) -> String {
    format!(
        "⏳ Converting {} to {}...",
        file_name,
        conversion.target().label()
    )
}

/// Reply for a failed relay; one text per failure kind.
pub fn failure(error: &HandlerError) -> &'static str {
    match error {
        HandlerError::Storage(_) => MSG_INTERNAL,
        HandlerError::Download(_) => MSG_DOWNLOAD_FAILED,
        HandlerError::Conversion(_) => MSG_CONVERSION_FAILED,
        HandlerError::Timeout(_) => MSG_TIMEOUT,
        HandlerError::Upload(_) => MSG_UPLOAD_FAILED,
    }
}
