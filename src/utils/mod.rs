//! Shared helpers.

pub mod format;

pub use format::{format_compact, format_with_commas};
