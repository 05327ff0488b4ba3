//! Main content panels.

pub mod history;

pub use history::render_history;
