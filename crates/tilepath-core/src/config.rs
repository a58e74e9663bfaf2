//! Load-time configuration.

/// How forgiving the legend and terrain parsers are.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParseMode {
    /// Accept the historical file formats as-is: only the first character
    /// of a legend key counts, and the grid width is taken from the last
    /// terrain row.
    #[default]
    Compat,
    /// Require single-character legend keys and equal-width terrain rows.
    Strict,
}

/// Options for [`CostGrid::load_with`](crate::CostGrid::load_with) and
/// friends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadOptions {
    pub mode: ParseMode,
}

impl LoadOptions {
    /// Options with [`ParseMode::Strict`].
    pub const fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }
}
