#![warn(rust_2018_idioms)]

//! Contextual shaping of Arabic text.
//!
//! Converts a logical-order string into the sequence of Unicode presentation
//! forms (isolated, initial, medial, final) a renderer should display,
//! resolving which letters join their neighbours and substituting the
//! mandatory Lam-Alef ligatures.
//!
//! ```
//! use khatt::shape;
//!
//! // beh beh: initial form then final form
//! let result = shape("\u{0628}\u{0628}");
//! assert_eq!(result.text(), "\u{FE91}\u{FE90}");
//!
//! // lam alef collapses to the single ligature glyph
//! let result = shape("\u{0644}\u{0627}");
//! assert_eq!(result.glyphs(), ['\u{FEFB}']);
//! ```
//!
//! Shaping is a pure scan over read-only tables: no I/O, no shared mutable
//! state, and safe to run concurrently.

pub mod error;
pub mod joining;
pub mod shape;
pub mod tables;
/// Codepoint escape formatting for diagnostics.
pub mod unicode;

pub use crate::shape::{shape, ShapingResult};
pub use crate::tables::ShapingTables;
