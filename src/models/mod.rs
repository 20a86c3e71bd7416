//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Category`], [`CategoryFilter`] - Category listing and the active filter
//! - [`ItemSummary`], [`ItemDetail`], [`Stats`] - Items before and after hydration
//! - [`ListPage`] - One page of the paginated listing
//! - [`AppRoute`] - Hash-based navigation
//! - [`api`] - Upstream JSON shapes

pub mod api;
mod category;
mod item;
mod page;
mod route;

pub use category::{Category, CategoryFilter};
pub use item::{ImageVariants, ItemDetail, ItemSummary, Stats};
pub use page::ListPage;
pub use route::{AppRoute, Crumb};
