//! Text-to-cell compiler.
//!
//! Characters are laid out left to right in 7-row chart columns. A space
//! advances two columns; each glyph is followed by a one-column gap.

use super::glyphs::{glyph, GLYPH_ROWS};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DAYS_PER_WEEK: usize = 7;
const SPACE_COLUMNS: usize = 2;
const GLYPH_GAP_COLUMNS: usize = 1;

/// Pattern compilation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The glyph table has no entry for this (uppercased) character.
    UnsupportedCharacter(char),
}

impl Display for PatternError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedCharacter(ch) => {
                write!(f, "character `{ch}` is not supported by the pattern font")
            }
        }
    }
}

impl Error for PatternError {}

/// Number of distinct columns a glyph bitmap occupies.
pub fn character_width(offsets: &[u8]) -> usize {
    offsets
        .iter()
        .map(|p| usize::from(*p) / GLYPH_ROWS)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Compiles `text` into chart cell indices (`row + column * 7`).
///
/// Input is uppercased first. Indices are emitted in character order and
/// address days counted from January 1 of the target year; callers must
/// check them against the year length.
pub fn text_to_pattern(text: &str) -> Result<Vec<usize>, PatternError> {
    let mut cells = Vec::new();
    let mut column_offset = 0;

    for ch in text.to_uppercase().chars() {
        if ch == ' ' {
            column_offset += SPACE_COLUMNS;
            continue;
        }

        let offsets = glyph(ch).ok_or(PatternError::UnsupportedCharacter(ch))?;
        cells.extend(offsets.iter().map(|p| {
            let p = usize::from(*p);
            let row = p % GLYPH_ROWS;
            let col = p / GLYPH_ROWS;
            row + (col + column_offset) * DAYS_PER_WEEK
        }));
        column_offset += character_width(offsets) + GLYPH_GAP_COLUMNS;
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::{character_width, text_to_pattern, PatternError};
    use crate::pattern::glyphs::glyph;

    #[test]
    fn width_counts_distinct_columns() {
        assert_eq!(character_width(glyph('A').unwrap()), 3);
        assert_eq!(character_width(glyph('M').unwrap()), 5);
        assert_eq!(character_width(glyph('!').unwrap()), 1);
    }

    #[test]
    fn empty_and_blank_text_compile_to_nothing() {
        assert_eq!(text_to_pattern("").unwrap(), Vec::<usize>::new());
        assert_eq!(text_to_pattern("   ").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn unsupported_character_fails_whole_input() {
        assert_eq!(
            text_to_pattern("HI~"),
            Err(PatternError::UnsupportedCharacter('~'))
        );
    }
}
