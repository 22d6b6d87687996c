//! Listing run for colls.
//!
//! [Lister] ties together the listing options, the display settings, the terminal width
//! provider and the identity resolver, and turns one target path into finished output lines.
//! Nothing is written until the whole listing has been rendered, so a fatal error never
//! leaves partial output behind.

use crate::config::Config;
use crate::core::{
    Entry, IdentityResolver, ListOptions, ListResult, TerminalWidth, enumerate, extract,
    grid_lines, long_lines, resolve_width,
};

use std::path::Path;

/// One configured listing.
pub struct Lister<'a> {
    options: ListOptions,
    dir_marker: bool,
    fallback_width: usize,
    width: &'a dyn TerminalWidth,
    identity: &'a dyn IdentityResolver,
}

impl<'a> Lister<'a> {
    pub fn new(
        options: ListOptions,
        config: &Config,
        width: &'a dyn TerminalWidth,
        identity: &'a dyn IdentityResolver,
    ) -> Self {
        Self {
            options,
            dir_marker: config.display().dir_marker(),
            fallback_width: config.display().fallback_width(),
            width,
            identity,
        }
    }

    /// Enumerates `target`, applies filtering and ordering, and renders it.
    ///
    /// # Errors
    /// Any enumeration or metadata failure aborts the whole listing.
    pub fn list(&self, target: &Path) -> ListResult<Vec<String>> {
        let listing = enumerate(target)?;
        let entries = self.options.apply(listing);
        log::debug!(
            "{} entries after filtering ({:?})",
            entries.len(),
            self.options
        );

        if self.options.long_format {
            self.render_long(&entries)
        } else {
            Ok(self.render_standard(&entries))
        }
    }

    fn render_standard(&self, entries: &[Entry]) -> Vec<String> {
        let names: Vec<_> = entries.iter().map(|e| e.name_str()).collect();
        let width = resolve_width(self.width, self.fallback_width);
        grid_lines(&names, width)
    }

    fn render_long(&self, entries: &[Entry]) -> ListResult<Vec<String>> {
        let records = entries
            .iter()
            .map(|e| extract(e, self.identity))
            .collect::<ListResult<Vec<_>>>()?;
        Ok(long_lines(&records, self.dir_marker))
    }
}
