//! Message displayed to the user.

/// Message types.
#[derive(Clone, PartialEq, Debug)]
pub enum MessageType {
    /// Informational message.
    Info,

    /// Error message.
    Error,
}

/// A Message.
#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    /// Message to display.
    pub message: String,

    /// Type of message.
    pub kind: MessageType,
}

impl Message {
    /// Create a `Message` with a `kind` of [`MessageType::Info`].
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: MessageType::Info,
        }
    }

    /// Create a `Message` with a `kind` of [`MessageType::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: MessageType::Error,
        }
    }
}
