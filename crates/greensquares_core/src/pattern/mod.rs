//! Text-to-pattern compilation.
//!
//! # Responsibility
//! - Own the static pixel-font glyph table.
//! - Turn input text into chart cell indices.
//!
//! # Invariants
//! - Compilation is pure and deterministic.
//! - Unsupported characters fail the whole input; no partial patterns.

pub mod compiler;
pub mod glyphs;

pub use compiler::{character_width, text_to_pattern, PatternError};
pub use glyphs::{glyph, is_supported, GLYPH_ROWS};
