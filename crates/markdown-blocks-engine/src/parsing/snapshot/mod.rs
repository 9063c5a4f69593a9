//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable, serializable `Snap`
//!   format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (code languages
//!   whitelisted, no nesting, single-line headings and items, no invented text)
//!
//! ## Testing Strategy
//!
//! Parsing behaviour is defined by fixture snapshots: each `tests/fixtures/*.md`
//! file has a `.snap` next to it asserting block kinds, languages and content.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
