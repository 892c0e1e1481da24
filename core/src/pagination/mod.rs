//! Page number strip.
pub mod config;
pub mod layout;
pub mod paginator;
pub mod window;

// Re-exports
pub use config::PaginatorConfig;
pub use layout::{default_layout, PageControl, PageItem};
pub use paginator::{Paginator, RenderState};
pub use window::{calculate_window, PageWindow};
