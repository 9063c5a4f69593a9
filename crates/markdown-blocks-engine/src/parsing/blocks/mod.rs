//! # Block Parsing
//!
//! Two-phase, single forward pass over the input lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line outside a code fence is
//!    classified into a `LineClass` using only local facts (markers, blankness)
//!
//! 2. **Block Construction** (`builder`): a `ParserState` value is threaded
//!    through the lines; each step returns the next state and pushes any
//!    blocks it completes
//!
//! ## Modules
//!
//! - **`types`**: Core types (`MdBlock`, `MdBlockKind`)
//! - **`kinds`**: Block-specific syntax with owned delimiters (CodeFence,
//!   BlockQuote, Heading, ListItem, Divider, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `ParserState` transitions and the `BlockBuilder` driving them
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no classification inside
//! - Output order follows the line where each block starts
//! - No lookahead: a line is never reclassified because of later lines
//! - Parsing never fails; unterminated fences are flushed at end of input

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, ParserState};
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{MdBlock, MdBlockKind};
