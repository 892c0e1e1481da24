//! UI Components
pub mod messages;

// Re-exports
pub use messages::Message;
