//! Pixel-font glyph table.
//!
//! Each glyph is a list of offsets `p` encoding `row = p % 5` and
//! `col = p / 5`. All offsets are below 35 (at most 7 columns).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Glyph height in chart rows.
pub const GLYPH_ROWS: usize = 5;

const MAX_GLYPH_COLUMNS: usize = 7;

#[rustfmt::skip]
const GLYPH_ART: &[(char, [&str; GLYPH_ROWS])] = &[
    ('A', [".#.", "#.#", "###", "#.#", "#.#"]),
    ('B', ["##.", "#.#", "##.", "#.#", "##."]),
    ('C', [".##", "#..", "#..", "#..", ".##"]),
    ('D', ["##.", "#.#", "#.#", "#.#", "##."]),
    ('E', ["###", "#..", "##.", "#..", "###"]),
    ('F', ["###", "#..", "##.", "#..", "#.."]),
    ('G', [".###", "#...", "#.##", "#..#", ".##."]),
    ('H', ["#.#", "#.#", "###", "#.#", "#.#"]),
    ('I', ["###", ".#.", ".#.", ".#.", "###"]),
    ('J', ["..#", "..#", "..#", "#.#", ".#."]),
    ('K', ["#.#", "#.#", "##.", "#.#", "#.#"]),
    ('L', ["#..", "#..", "#..", "#..", "###"]),
    ('M', ["#...#", "##.##", "#.#.#", "#...#", "#...#"]),
    ('N', ["#..#", "##.#", "#.##", "#..#", "#..#"]),
    ('O', [".#.", "#.#", "#.#", "#.#", ".#."]),
    ('P', ["##.", "#.#", "##.", "#..", "#.."]),
    ('Q', [".##.", "#..#", "#..#", "#.#.", ".#.#"]),
    ('R', ["##.", "#.#", "##.", "#.#", "#.#"]),
    ('S', [".##", "#..", ".#.", "..#", "##."]),
    ('T', ["###", ".#.", ".#.", ".#.", ".#."]),
    ('U', ["#.#", "#.#", "#.#", "#.#", "###"]),
    ('V', ["#.#", "#.#", "#.#", "#.#", ".#."]),
    ('W', ["#...#", "#...#", "#.#.#", "##.##", "#...#"]),
    ('X', ["#.#", "#.#", ".#.", "#.#", "#.#"]),
    ('Y', ["#.#", "#.#", ".#.", ".#.", ".#."]),
    ('Z', ["###", "..#", ".#.", "#..", "###"]),
    ('0', ["###", "#.#", "#.#", "#.#", "###"]),
    ('1', [".#.", "##.", ".#.", ".#.", "###"]),
    ('2', ["##.", "..#", ".#.", "#..", "###"]),
    ('3', ["##.", "..#", ".#.", "..#", "##."]),
    ('4', ["#.#", "#.#", "###", "..#", "..#"]),
    ('5', ["###", "#..", "##.", "..#", "##."]),
    ('6', [".##", "#..", "###", "#.#", "###"]),
    ('7', ["###", "..#", ".#.", ".#.", ".#."]),
    ('8', ["###", "#.#", "###", "#.#", "###"]),
    ('9', ["###", "#.#", "###", "..#", "##."]),
    ('!', ["#", "#", "#", ".", "#"]),
    ('?', ["##.", "..#", ".#.", "...", ".#."]),
    ('.', [".", ".", ".", ".", "#"]),
    (',', ["..", "..", "..", ".#", "#."]),
    ('-', ["...", "...", "###", "...", "..."]),
    ('+', ["...", ".#.", "###", ".#.", "..."]),
    (':', [".", "#", ".", "#", "."]),
    ('\'', ["#", "#", ".", ".", "."]),
    ('/', ["..#", "..#", ".#.", "#..", "#.."]),
];

static GLYPHS: Lazy<HashMap<char, Vec<u8>>> = Lazy::new(|| {
    GLYPH_ART
        .iter()
        .map(|(ch, rows)| (*ch, offsets_from_art(rows)))
        .collect()
});

fn offsets_from_art(rows: &[&str; GLYPH_ROWS]) -> Vec<u8> {
    let mut offsets = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, pixel) in line.chars().enumerate() {
            if pixel == '#' {
                debug_assert!(col < MAX_GLYPH_COLUMNS);
                offsets.push((row + col * GLYPH_ROWS) as u8);
            }
        }
    }
    offsets.sort_unstable();
    offsets
}

/// Bitmap offsets for `ch`, if the font has it. Lookup is case-sensitive.
pub fn glyph(ch: char) -> Option<&'static [u8]> {
    GLYPHS.get(&ch).map(Vec::as_slice)
}

/// Returns `true` when `ch` (after uppercasing) can be compiled.
pub fn is_supported(ch: char) -> bool {
    ch == ' ' || ch.to_uppercase().all(|upper| GLYPHS.contains_key(&upper))
}

#[cfg(test)]
mod tests {
    use super::{glyph, is_supported, GLYPH_ART, GLYPH_ROWS, MAX_GLYPH_COLUMNS};

    #[test]
    fn art_rows_are_rectangular() {
        for (ch, rows) in GLYPH_ART {
            let width = rows[0].len();
            assert!(width <= MAX_GLYPH_COLUMNS, "glyph {ch} too wide");
            assert!(rows.iter().all(|row| row.len() == width), "glyph {ch}");
        }
    }

    #[test]
    fn offsets_stay_inside_encoding() {
        for (ch, _) in GLYPH_ART {
            let offsets = glyph(*ch).unwrap();
            assert!(!offsets.is_empty());
            assert!(offsets
                .iter()
                .all(|p| usize::from(*p) < GLYPH_ROWS * MAX_GLYPH_COLUMNS));
        }
    }

    #[test]
    fn lowercase_is_supported_through_uppercase() {
        assert!(is_supported('a'));
        assert!(is_supported(' '));
        assert!(!is_supported('~'));
        assert!(glyph('a').is_none());
    }
}
