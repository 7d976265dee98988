//! Handler chain result type.

/// What the chain does after a handler's `handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// The message is answered; stop the handle phase.
    Stop,
}
