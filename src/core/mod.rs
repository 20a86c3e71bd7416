//! Core catalog logic.
//!
//! This module provides:
//! - [`PokeApi`] - Stateless gateway over the external creature database
//! - [`ListSession`] - Browsing session state and its transitions
//! - [`ListController`] - Async driver that loads pages into a session
//! - [`error`] - Transport and API error types

mod controller;
pub mod error;
mod gateway;
mod session;
#[cfg(test)]
pub mod testing;

pub use controller::ListController;
pub use gateway::PokeApi;
pub use session::ListSession;
