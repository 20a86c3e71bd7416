//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Header and footer around every page
//! - [`catalog`] - Filter form and infinite card grid
//! - [`detail`] - Single item page
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod breadcrumb;
pub mod catalog;
pub mod detail;
pub mod icons;
pub mod layout;
pub mod not_found;
pub mod router;

pub use layout::Layout;
pub use router::AppRouter;
