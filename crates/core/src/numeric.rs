//! Numeric normalization for decorated amount text.
//!
//! Catalog amounts are stored as free-form text (`"15,000"`, `"1,234 coins"`,
//! `"N/A"`). Comparisons work on the integer extracted from that text.

/// Extract the integer value from decorated amount text.
///
/// Only ASCII digits and `.` are kept; everything else (thousands separators,
/// currency words, signs) is discarded. The digits before the first `.` are
/// then read as the value. Text without digits ahead of any `.` yields `0`,
/// and values beyond `i64::MAX` saturate.
pub fn normalize_amount(raw: &str) -> i64 {
    let mut value: i64 = 0;
    for c in raw.chars().filter(|c| c.is_ascii_digit() || *c == '.') {
        if c == '.' {
            break;
        }
        let digit = i64::from(c as u8 - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }
    value
}
