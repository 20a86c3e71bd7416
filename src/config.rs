//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Pokémon Search";

/// Credit link shown in the footer.
pub const DATA_SOURCE_URL: &str = "https://pokeapi.co/";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the external creature database.
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Number of items requested per page.
pub const PAGE_SIZE: usize = 20;

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Stat keys every item carries, in display order.
pub const STAT_KEYS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// User-facing message when a page fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to fetch Pokémon data";

// =============================================================================
// UI Configuration
// =============================================================================

/// Delay before search input is applied, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: f64 = 250.0;

/// Detail page display limits.
pub mod detail {
    /// Number of moves shown on the detail page.
    pub const MOVE_LIMIT: usize = 5;
    /// Stat value rendered as a full bar.
    pub const STAT_BAR_MAX: u32 = 150;
}
