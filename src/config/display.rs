//! Display configuration options for colls
//!
//! This module defines the `[display]` table of the colls.toml configuration file.

use crate::core::FALLBACK_WIDTH;

use serde::Deserialize;

/// Display configuration options
///
/// `dir_marker` appends `/` to directory names in the long report.
/// `fallback_width` is the grid width used when the terminal cannot be queried.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    dir_marker: bool,
    fallback_width: usize,
}

impl Display {
    #[inline]
    pub fn dir_marker(&self) -> bool {
        self.dir_marker
    }

    /// Never zero; a zero in the file is treated as one column.
    #[inline]
    pub fn fallback_width(&self) -> usize {
        self.fallback_width.max(1)
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            dir_marker: true,
            fallback_width: FALLBACK_WIDTH,
        }
    }
}
