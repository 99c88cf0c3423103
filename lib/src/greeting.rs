//! Greeting formatting utilities.
//!
//! This module provides the greeting formatter: a pure function mapping an
//! optional name to one of two deterministic greeting forms.
//!
//! ## Core Items
//!
//! - [`format_greeting`] - Format a greeting from an optional name
//! - [`DEFAULT_GREETING`] - The fallback greeting for unusable names
//!
//! ## Examples
//!
//! ```rust
//! use well_met::{DEFAULT_GREETING, format_greeting};
//!
//! // A usable name is greeted directly
//! assert_eq!(format_greeting(Some("Yuzu")), "Hello, Yuzu!");
//!
//! // Absent, empty, and whitespace-only names all fall back
//! assert_eq!(format_greeting(None), DEFAULT_GREETING);
//! assert_eq!(format_greeting(Some("")), DEFAULT_GREETING);
//! assert_eq!(format_greeting(Some("   ")), DEFAULT_GREETING);
//! ```

/// The greeting returned when no usable name is available.
///
/// A name is usable when it contains at least one non-whitespace character;
/// `None`, the empty string, and whitespace-only strings all produce this
/// literal.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Formats a greeting for the given name.
///
/// Returns `"Hello, {name}!"` when `name` contains at least one
/// non-whitespace character, and [`DEFAULT_GREETING`] otherwise. An accepted
/// name is reproduced verbatim: no trimming, no length limit, no
/// character-set restriction. Whitespace classification follows Unicode
/// `White_Space` (the [`str::trim`] definition), so tabs, newlines, and
/// non-ASCII spaces all count as blank.
///
/// ## Examples
///
/// ```rust
/// use well_met::format_greeting;
///
/// assert_eq!(format_greeting(Some("Yuzu")), "Hello, Yuzu!");
/// assert_eq!(format_greeting(None), "Hello, World!");
///
/// // Padding on a usable name is preserved, not trimmed
/// assert_eq!(format_greeting(Some("  Yuzu  ")), "Hello,   Yuzu  !");
/// ```
#[must_use]
pub fn format_greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Hello, {name}!"),
        _ => DEFAULT_GREETING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Fallback Path Tests ====================

    #[test]
    fn test_format_greeting_none() {
        assert_eq!(format_greeting(None), "Hello, World!");
    }

    #[test]
    fn test_format_greeting_empty_string() {
        assert_eq!(format_greeting(Some("")), "Hello, World!");
    }

    #[test]
    fn test_format_greeting_spaces_only() {
        assert_eq!(format_greeting(Some("   ")), "Hello, World!");
    }

    #[test]
    fn test_format_greeting_mixed_whitespace() {
        assert_eq!(format_greeting(Some(" \t\r\n ")), "Hello, World!");
    }

    #[test]
    fn test_format_greeting_unicode_whitespace() {
        // NBSP and ideographic space are Unicode White_Space
        assert_eq!(format_greeting(Some("\u{a0}\u{3000}")), "Hello, World!");
    }

    #[test]
    fn test_fallback_matches_default_greeting() {
        assert_eq!(format_greeting(None), DEFAULT_GREETING);
        assert_eq!(format_greeting(Some("")), DEFAULT_GREETING);
    }

    // ==================== Named Path Tests ====================

    #[test]
    fn test_format_greeting_simple_name() {
        assert_eq!(format_greeting(Some("Yuzu")), "Hello, Yuzu!");
    }

    #[test]
    fn test_format_greeting_multi_word_name() {
        assert_eq!(
            format_greeting(Some("Ada Lovelace")),
            "Hello, Ada Lovelace!"
        );
    }

    #[test]
    fn test_format_greeting_preserves_padding() {
        // Padded names pass through verbatim, untrimmed
        assert_eq!(format_greeting(Some("  Yuzu  ")), "Hello,   Yuzu  !");
        assert_eq!(format_greeting(Some("\tYuzu")), "Hello, \tYuzu!");
    }

    #[test]
    fn test_format_greeting_unicode_name() {
        assert_eq!(format_greeting(Some("世界")), "Hello, 世界!");
        assert_eq!(format_greeting(Some("🚀")), "Hello, 🚀!");
    }

    #[test]
    fn test_format_greeting_special_chars() {
        assert_eq!(format_greeting(Some("O'Brien")), "Hello, O'Brien!");
        assert_eq!(format_greeting(Some("a\nb")), "Hello, a\nb!");
    }

    // ==================== Determinism ====================

    #[test]
    fn test_format_greeting_deterministic() {
        assert_eq!(format_greeting(Some("Yuzu")), format_greeting(Some("Yuzu")));
        assert_eq!(format_greeting(None), format_greeting(None));
    }
}
