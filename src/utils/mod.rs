//! Utility modules for web and formatting operations.
//!
//! Provides:
//! - [`fetch_text`] - Network fetching with timeout
//! - [`dom`] - Window, scrolling, and URL hash helpers
//! - [`format`] - Display formatting for names and stats

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::fetch_text;
