//! Fixed-stride glyph lookup.
//!
//! Character `ch` occupies rows `(ch - 32) * 9 ..= (ch - 32) * 9 + 8` of a
//! bank. Only sub-rows 1-8 are ever read. Lookups that land outside the bank
//! yield `None` instead of failing, so undersized banks truncate output.

use super::bank::{FontBank, FIRST_CHAR, ROWS_PER_GLYPH};

/// Number of visible rows in every glyph.
pub const GLYPH_HEIGHT: usize = 8;

/// Look up sub-row `m` (1-8) of `ch`'s glyph.
///
/// Characters below the space produce negative indices and therefore `None`,
/// the same as characters past the end of the bank.
pub fn glyph_row(bank: &FontBank, ch: char, m: usize) -> Option<&str> {
    let base = (i64::from(u32::from(ch)) - i64::from(FIRST_CHAR)) * ROWS_PER_GLYPH as i64;
    let index = base + m as i64;
    if index < 0 {
        return None;
    }
    bank.line(usize::try_from(index).ok()?)
}

/// All eight sub-rows of `ch`'s glyph, top to bottom.
pub fn glyph(bank: &FontBank, ch: char) -> [Option<&str>; GLYPH_HEIGHT] {
    std::array::from_fn(|i| glyph_row(bank, ch, i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bank with two glyphs: space (all blank) and '!' (rows tagged by index).
    fn two_glyph_bank() -> FontBank {
        let mut lines = vec![String::new(); 18];
        for m in 1..=8 {
            lines[m] = "  ".to_string();
            lines[9 + m] = format!("!{m}");
        }
        FontBank::from_lines(lines)
    }

    #[test]
    fn test_glyph_row_stride() {
        let bank = two_glyph_bank();
        assert_eq!(glyph_row(&bank, ' ', 1), Some("  "));
        assert_eq!(glyph_row(&bank, '!', 1), Some("!1"));
        assert_eq!(glyph_row(&bank, '!', 8), Some("!8"));
    }

    #[test]
    fn test_glyph_never_reads_reserved_row() {
        let mut lines: Vec<String> = (0..18).map(|i| format!("row{i}")).collect();
        lines[9] = "RESERVED".to_string();
        let bank = FontBank::from_lines(lines);

        let rows = glyph(&bank, '!');
        assert!(rows.iter().all(|r| *r != Some("RESERVED")));
        assert_eq!(rows[0], Some("row10"));
        assert_eq!(rows[7], Some("row17"));
    }

    #[test]
    fn test_glyph_out_of_range_is_none() {
        let bank = two_glyph_bank();
        // '"' starts at row 18, past the end of an 18-row bank
        assert_eq!(glyph(&bank, '"'), [None; GLYPH_HEIGHT]);
        assert_eq!(glyph_row(&bank, 'A', 1), None);
    }

    #[test]
    fn test_control_characters_are_none() {
        let bank = two_glyph_bank();
        assert_eq!(glyph_row(&bank, '\t', 1), None);
        assert_eq!(glyph_row(&bank, '\0', 8), None);
    }

    #[test]
    fn test_control_character_landing_inside_bank() {
        // code 31 gives base -9; sub-row 9 would be index 0, but only 1-8 are read
        let bank = two_glyph_bank();
        assert_eq!(glyph(&bank, '\u{1f}'), [None; GLYPH_HEIGHT]);
    }

    #[test]
    fn test_partial_glyph_at_bank_end() {
        let lines: Vec<String> = (0..14).map(|i| format!("r{i}")).collect();
        let bank = FontBank::from_lines(lines);

        let rows = glyph(&bank, '!');
        assert_eq!(rows[..4], [Some("r10"), Some("r11"), Some("r12"), Some("r13")]);
        assert_eq!(rows[4..], [None; 4]);
    }

    #[test]
    fn test_lookup_is_stable() {
        let bank = two_glyph_bank();
        assert_eq!(glyph(&bank, '!'), glyph(&bank, '!'));
    }
}
