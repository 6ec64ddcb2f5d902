//! Formatting helpers for the expense table and summary views.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use unicode_segmentation::UnicodeSegmentation;

/// The max number of graphemes to display in the note column before
/// truncating and displaying ellipses.
const MAX_NOTE_GRAPHEMES: usize = 32;

/// Format an amount as a currency string with two decimal places, e.g.
/// "$12.50" or "-$3.20".
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    // Zero is hardcoded as "0" by numfmt, so render it ourselves.
    if amount == 0.0 {
        return "$0.00".to_owned();
    }

    let formatter = if amount < 0.0 {
        NEGATIVE_FMT.get_or_init(|| {
            Formatter::currency("-$")
                .unwrap()
                .precision(Precision::Decimals(2))
        })
    } else {
        POSITIVE_FMT.get_or_init(|| {
            Formatter::currency("$")
                .unwrap()
                .precision(Precision::Decimals(2))
        })
    };

    let mut formatted = formatter.fmt_string(amount.abs());

    // numfmt omits the last trailing zero, e.g. "12.30" is rendered as
    // "12.3", so we append the "0" ourselves.
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

/// Truncate `note` to fit the table's note column.
///
/// Counts grapheme clusters rather than bytes so that multi-byte text is never
/// split mid-character.
pub fn truncate_note(note: &str) -> String {
    if note.graphemes(true).count() <= MAX_NOTE_GRAPHEMES {
        note.to_owned()
    } else {
        let truncated: String = note.graphemes(true).take(MAX_NOTE_GRAPHEMES - 3).collect();
        truncated + "..."
    }
}
