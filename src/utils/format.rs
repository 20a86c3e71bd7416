//! Formatting utilities for names, stats, and other display values.

use crate::config::detail::STAT_BAR_MAX;

/// Uppercase the first character (e.g. "fire" -> "Fire").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn an upstream slug into a label (e.g. "special-attack" -> "Special attack").
pub fn humanize(slug: &str) -> String {
    capitalize(&slug.replace('-', " "))
}

/// Width of a stat bar as a percentage, capped at 100.
pub fn stat_bar_percent(value: u32) -> f64 {
    (f64::from(value) / f64::from(STAT_BAR_MAX) * 100.0).min(100.0)
}

/// Pokédex number with zero padding (e.g. 25 -> "#025").
pub fn format_dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fire"), "Fire");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("special-attack"), "Special attack");
        assert_eq!(humanize("mr-mime"), "Mr mime");
        assert_eq!(humanize("hp"), "Hp");
    }

    #[test]
    fn test_stat_bar_percent() {
        assert_eq!(stat_bar_percent(0), 0.0);
        assert_eq!(stat_bar_percent(75), 50.0);
        assert_eq!(stat_bar_percent(150), 100.0);
        assert_eq!(stat_bar_percent(255), 100.0);
    }

    #[test]
    fn test_format_dex_number() {
        assert_eq!(format_dex_number(25), "#025");
        assert_eq!(format_dex_number(1025), "#1025");
    }
}
