//! Inbound file reference carried by a document message.

use serde::{Deserialize, Serialize};

/// A document attached to an incoming message. Only valid for one handler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingDocument {
    /// Opaque platform handle used to download the bytes.
    pub file_id: String,
    /// Name declared by the sender. Untrusted: may contain path separators or be missing.
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    /// Size reported by the platform; 0 when unknown.
    pub file_size: u64,
}
