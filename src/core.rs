//! Listing engine for colls.
//!
//! This module contains the pieces that turn a path into output lines:
//! - [fm]: directory enumeration, hidden-entry filtering and ordering (see [enumerate], [Entry], [ListOptions]).
//! - [metadata]: per-entry status and identity lookups for the long report (see [extract], [MetadataRecord]).
//! - [layout]: tab-stop column packing for the standard grid (see [Layout], [grid_lines]).
//! - [formatter]: the long report with its aligned columns (see [long_lines]).
//! - [terminal]: terminal width discovery with a fallback (see [TerminalWidth]).
//! - [error]: the [ListError] every fallible operation returns.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod layout;
pub mod metadata;
pub mod terminal;

pub use error::{IdKind, ListError, ListResult};
pub use fm::{Entry, ListOptions, Listing, enumerate, filter_hidden, sort_entries};
pub use formatter::{LongColumns, format_file_time, format_long_line, long_lines, total_blocks};
pub use layout::{Layout, TAB_WIDTH, column_width_for, display_width, grid_lines};
pub use metadata::{
    EntryKind, IdentityResolver, MetadataRecord, SystemIdentity, decode_permission, extract,
};
pub use terminal::{FALLBACK_WIDTH, FixedWidth, SystemWidth, TerminalWidth, resolve_width};
