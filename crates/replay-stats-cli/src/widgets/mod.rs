//! Reusable TUI widgets

mod footer;
mod header;

pub use footer::render_footer;
pub use header::render_header;
