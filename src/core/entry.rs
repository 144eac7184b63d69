//! Pending per-round score input.
//!
//! Entries are stored as the raw text the player typed and only parsed when
//! the round is committed. Anything that does not start with an integer
//! counts as zero.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Strip surrounding whitespace and byte-order marks from typed input.
pub(crate) fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Parse a raw round entry into points.
///
/// Surrounding whitespace (including a byte-order mark) is ignored, an optional sign is honoured, and the
/// longest run of leading digits is taken. Anything after the digits is
/// dropped. No digits means zero. Out-of-range values saturate.
///
/// ```
/// use knockout_scorer::core::parse_score_entry;
///
/// assert_eq!(parse_score_entry("12"), 12);
/// assert_eq!(parse_score_entry(" -4 "), -4);
/// assert_eq!(parse_score_entry("7.9"), 7);
/// assert_eq!(parse_score_entry("12abc"), 12);
/// assert_eq!(parse_score_entry("abc"), 0);
/// assert_eq!(parse_score_entry(""), 0);
/// ```
#[must_use]
pub fn parse_score_entry(raw: &str) -> i64 {
    let s = trim_input(raw);
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    for b in digits {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Raw score text per player for the round being entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntries {
    entries: FxHashMap<PlayerId, String>,
}

impl RoundEntries {
    /// Create an empty entry set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text for a player, replacing any earlier value.
    pub fn set(&mut self, player: PlayerId, raw: impl Into<String>) {
        self.entries.insert(player, raw.into());
    }

    /// Raw text entered for a player, if any.
    #[must_use]
    pub fn raw(&self, player: PlayerId) -> Option<&str> {
        self.entries.get(&player).map(String::as_str)
    }

    /// Parsed points for a player. Missing entries are zero.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> i64 {
        self.raw(player).map_or(0, parse_score_entry)
    }

    /// Number of players with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_score_entry("0"), 0);
        assert_eq!(parse_score_entry("35"), 35);
        assert_eq!(parse_score_entry("+8"), 8);
        assert_eq!(parse_score_entry("-12"), -12);
        assert_eq!(parse_score_entry("007"), 7);
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_score_entry("  10\n"), 10);
        assert_eq!(parse_score_entry("\t-3 "), -3);
        assert_eq!(parse_score_entry("\u{00A0}4"), 4);
    }

    #[test]
    fn test_parse_skips_byte_order_mark() {
        assert_eq!(parse_score_entry("\u{FEFF}12"), 12);
        assert_eq!(parse_score_entry(" \u{FEFF}-3\u{FEFF}"), -3);
        assert_eq!(parse_score_entry("\u{FEFF}"), 0);
    }

    #[test]
    fn test_trim_input() {
        assert_eq!(trim_input("\u{FEFF} Ada \n"), "Ada");
        assert_eq!(trim_input("A\u{FEFF}B"), "A\u{FEFF}B");
        assert_eq!(trim_input("\u{FEFF}\t"), "");
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_score_entry(""), 0);
        assert_eq!(parse_score_entry("   "), 0);
        assert_eq!(parse_score_entry("abc"), 0);
        assert_eq!(parse_score_entry("-"), 0);
        assert_eq!(parse_score_entry("+"), 0);
        assert_eq!(parse_score_entry("--5"), 0);
        assert_eq!(parse_score_entry(".5"), 0);
    }

    #[test]
    fn test_parse_takes_leading_digits() {
        assert_eq!(parse_score_entry("12abc"), 12);
        assert_eq!(parse_score_entry("7.9"), 7);
        assert_eq!(parse_score_entry("-7.9"), -7);
        assert_eq!(parse_score_entry("1 2"), 1);
        assert_eq!(parse_score_entry("0x1F"), 0);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_score_entry("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_score_entry("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_entries_overwrite() {
        let mut entries = RoundEntries::new();
        let p = PlayerId::new(1);

        entries.set(p, "5");
        entries.set(p, "9");

        assert_eq!(entries.raw(p), Some("9"));
        assert_eq!(entries.points(p), 9);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_missing_entry_is_zero() {
        let entries = RoundEntries::new();
        assert_eq!(entries.raw(PlayerId::new(1)), None);
        assert_eq!(entries.points(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_clear() {
        let mut entries = RoundEntries::new();
        entries.set(PlayerId::new(1), "5");
        entries.set(PlayerId::new(2), "x");

        entries.clear();
        assert!(entries.is_empty());
    }
}
