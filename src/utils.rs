//! Miscellaneous utility functions for colls.
//!
//! This module holds the [cli] argument parser and the [helpers] submodule, which provides:
//! - Locating the home directory
//! - Expanding a leading `~` in paths
//! - Picking the listing target, falling back to an explicit working directory

pub mod cli;
pub mod helpers;

pub use helpers::{expand_home_path, get_home, resolve_target};
