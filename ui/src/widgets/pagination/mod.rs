//! Pagination widgets.
pub mod pagination;
pub mod renderer;
pub mod state;

// Re-exports
pub use pagination::Pagination;
pub use renderer::default_renderer;
pub use state::{use_paginator, PaginatorAction, PaginatorReducer, PaginatorState};
