//! Greeting formatting for the well-met ecosystem.
//!
//! This crate provides a single pure operation: turning an optional name
//! into a human-readable greeting. Absent, empty, and whitespace-only
//! names fall back to a generic greeting; any other name is greeted
//! verbatim, untrimmed.
//!
//! ## Examples
//!
//! ```rust
//! use well_met::{DEFAULT_GREETING, format_greeting};
//!
//! assert_eq!(format_greeting(Some("Yuzu")), "Hello, Yuzu!");
//! assert_eq!(format_greeting(None), DEFAULT_GREETING);
//! ```

pub mod greeting;

// Re-exports for convenience

pub use greeting::{DEFAULT_GREETING, format_greeting};
