//! The general configuration settings for colls.
//!
//! This module defines the [General] struct for deserializing the `[general]` table
//! of `colls.toml`. Each field is the default for one command-line flag.

use crate::core::ListOptions;

use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    long_format: bool,
    show_hidden: bool,
    reverse_order: bool,
}

impl General {
    #[inline]
    pub fn long_format(&self) -> bool {
        self.long_format
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn reverse_order(&self) -> bool {
        self.reverse_order
    }

    /// Listing options before any command-line flag is applied.
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            long_format: self.long_format,
            show_hidden: self.show_hidden,
            reverse_order: self.reverse_order,
        }
    }
}
