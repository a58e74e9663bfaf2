//! Character-to-cost tables.
//!
//! A legend is a text file with one `<char>=<cost>` entry per line:
//!
//! ```text
//! .=1
//! ~=3
//! #=-1
//! ```

use std::collections::BTreeMap;

use crate::config::{LoadOptions, ParseMode};
use crate::error::GridError;

/// Parsed mapping from terrain characters to traversal costs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    costs: BTreeMap<char, i32>,
}

impl Legend {
    /// Create an empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse legend text with the default [`ParseMode::Compat`] rules.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::parse_with(s, &LoadOptions::default())
    }

    /// Parse legend text.
    ///
    /// Line terminators are stripped and blank lines are skipped. The cost
    /// is trimmed and read as a base-10 `i32`. Later entries for the same
    /// key replace earlier ones.
    pub fn parse_with(s: &str, opts: &LoadOptions) -> Result<Self, GridError> {
        let mut legend = Self::new();
        for (i, raw) in s.split('\n').enumerate() {
            let line_no = i + 1;
            let line = raw.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(GridError::MissingSeparator { line: line_no });
            };
            let mut chars = key.chars();
            let Some(ch) = chars.next() else {
                return Err(GridError::EmptyKey { line: line_no });
            };
            if opts.mode == ParseMode::Strict && chars.next().is_some() {
                return Err(GridError::LongKey {
                    line: line_no,
                    key: key.to_string(),
                });
            }
            let value = value.trim();
            let cost = value.parse::<i32>().map_err(|_| GridError::InvalidCost {
                line: line_no,
                value: value.to_string(),
            })?;
            legend.insert(ch, cost);
        }
        log::debug!("parsed legend with {} entries", legend.len());
        Ok(legend)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, ch: char, cost: i32) {
        self.costs.insert(ch, cost);
    }

    /// The cost for `ch`, if it has an entry.
    #[inline]
    pub fn get(&self, ch: char) -> Option<i32> {
        self.costs.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over entries in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, i32)> + '_ {
        self.costs.iter().map(|(&c, &v)| (c, v))
    }
}

impl FromIterator<(char, i32)> for Legend {
    fn from_iter<I: IntoIterator<Item = (char, i32)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entries() {
        let l = Legend::parse(".=1\n~=3\r\n#=-1\n").unwrap();
        assert_eq!(l.len(), 3);
        assert_eq!(l.get('.'), Some(1));
        assert_eq!(l.get('~'), Some(3));
        assert_eq!(l.get('#'), Some(-1));
        assert_eq!(l.get('x'), None);
    }

    #[test]
    fn value_whitespace_is_trimmed() {
        let l = Legend::parse("a= 7 \r\n").unwrap();
        assert_eq!(l.get('a'), Some(7));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let l = Legend::parse("\n.=1\n\r\n\n").unwrap();
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn later_entry_wins() {
        let l = Legend::parse(".=1\n.=4").unwrap();
        assert_eq!(l.get('.'), Some(4));
    }

    #[test]
    fn compat_uses_first_key_char() {
        let l = Legend::parse("ab=2").unwrap();
        assert_eq!(l.get('a'), Some(2));
        assert_eq!(l.get('b'), None);
    }

    #[test]
    fn strict_rejects_long_key() {
        let err = Legend::parse_with("ab=2", &LoadOptions::strict()).unwrap_err();
        assert!(matches!(err, GridError::LongKey { line: 1, ref key } if key == "ab"));
    }

    #[test]
    fn missing_separator() {
        let err = Legend::parse(".=1\nx1").unwrap_err();
        assert!(matches!(err, GridError::MissingSeparator { line: 2 }));
    }

    #[test]
    fn empty_key() {
        let err = Legend::parse("=1").unwrap_err();
        assert!(matches!(err, GridError::EmptyKey { line: 1 }));
    }

    #[test]
    fn invalid_cost() {
        let err = Legend::parse(".=one").unwrap_err();
        assert!(matches!(err, GridError::InvalidCost { line: 1, ref value } if value == "one"));
        let err = Legend::parse(".=").unwrap_err();
        assert!(matches!(err, GridError::InvalidCost { .. }));
    }

    #[test]
    fn equals_sign_as_value_part() {
        // Only the first `=` separates key from value.
        let err = Legend::parse(".=1=2").unwrap_err();
        assert!(matches!(err, GridError::InvalidCost { ref value, .. } if value == "1=2"));
    }

    #[test]
    fn from_iter() {
        let l: Legend = [('.', 1), ('~', 3)].into_iter().collect();
        let entries: Vec<_> = l.iter().collect();
        assert_eq!(entries, vec![('.', 1), ('~', 3)]);
    }
}
