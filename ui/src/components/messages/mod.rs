//! Display messages to the user.
pub mod message;

// Re-exports
pub use message::Message;
