//! Card-number ordering and synthetic numbers.

/// Prefix that marks a generated card number.
pub const SYNTHETIC_PREFIX: &str = "NaN";

/// Render the `n`th synthetic card number of a merge pass.
pub fn synthetic(n: u32) -> String {
    format!("{SYNTHETIC_PREFIX}{n}")
}

/// Whether `card_no` was generated by [`synthetic`].
pub fn is_synthetic(card_no: &str) -> bool {
    card_no
        .strip_prefix(SYNTHETIC_PREFIX)
        .and_then(parse_digits)
        .is_some()
}

/// Sort key for a card number.
///
/// Printed numbers sort first by value, synthetic numbers second by their
/// counter, any other token last in byte order. Cards with no number at all
/// come after everything.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CardNoKey {
    Numeric(u64),
    Synthetic(u64),
    Other(String),
    Unnumbered,
}

impl CardNoKey {
    pub fn of(card_no: Option<&str>) -> Self {
        let Some(no) = card_no else {
            return Self::Unnumbered;
        };
        if let Some(n) = parse_digits(no) {
            return Self::Numeric(n);
        }
        if let Some(n) = no.strip_prefix(SYNTHETIC_PREFIX).and_then(parse_digits) {
            return Self::Synthetic(n);
        }
        Self::Other(no.to_string())
    }
}

/// Parse a string made only of ASCII digits. Anything else is `None`,
/// including values too large for `u64`.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
#[path = "tests/card_no_tests.rs"]
mod tests;
