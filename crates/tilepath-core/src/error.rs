use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading a legend or a terrain layout.
///
/// Line and row numbers are 1-based.
#[derive(Debug)]
pub enum GridError {
    /// A legend line has no `=`.
    MissingSeparator { line: usize },
    /// A legend line has nothing before its `=`.
    EmptyKey { line: usize },
    /// A legend key is longer than one character (strict mode only).
    LongKey { line: usize, key: String },
    /// A legend cost is not a base-10 integer.
    InvalidCost { line: usize, value: String },
    /// A terrain row differs in width from the first row (strict mode only).
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A source file could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { line } => {
                write!(f, "legend line {line}: expected \u{201c}<char>=<cost>\u{201d}")
            }
            Self::EmptyKey { line } => write!(f, "legend line {line}: empty key"),
            Self::LongKey { line, key } => {
                write!(f, "legend line {line}: key \u{201c}{key}\u{201d} is not a single character")
            }
            Self::InvalidCost { line, value } => {
                write!(f, "legend line {line}: invalid cost \u{201c}{value}\u{201d}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "terrain row {row}: width {found} does not match width {expected}"
            ),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
