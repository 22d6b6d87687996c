//! Directory enumeration for colls.
//!
//! Provides the [Entry] and [Listing] structs used by every output mode,
//! and the [ListOptions] record that decides which entries survive and in which order.

use crate::core::error::{ListError, ListResult};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A single name to be listed, together with the directory it lives in.
///
/// For a plain file given on the command line, `dir` is the path's parent as written
/// (possibly empty), so `dir.join(name)` always points back at the original path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: OsString,
    dir: PathBuf,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, dir: impl Into<PathBuf>) -> Self {
        Entry {
            name: name.into(),
            dir: dir.into(),
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path used for the status call.
    #[inline]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }
}

/// The raw result of enumerating a target path.
#[derive(Debug, Clone)]
pub struct Listing {
    entries: Vec<Entry>,
    from_directory: bool,
}

impl Listing {
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// True when the target was a directory, false for a single named file.
    #[inline]
    pub fn from_directory(&self) -> bool {
        self.from_directory
    }
}

/// Flags that shape a listing. Every flag defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Print the long report instead of the column grid (`-l`).
    pub long_format: bool,
    /// Keep names starting with `.` (`-a`).
    pub show_hidden: bool,
    /// Reverse the sorted order (`-r`).
    pub reverse_order: bool,
}

impl ListOptions {
    /// Filters then reverses the listing according to the options.
    ///
    /// A single named file is never hidden-filtered.
    pub fn apply(&self, listing: Listing) -> Vec<Entry> {
        let from_directory = listing.from_directory;
        let mut entries = listing.into_entries();
        if from_directory && !self.show_hidden {
            filter_hidden(&mut entries);
        }
        if self.reverse_order {
            entries.reverse();
        }
        entries
    }
}

/// Drops every entry whose name starts with `.`.
pub fn filter_hidden(entries: &mut Vec<Entry>) {
    entries.retain(|e| !e.is_hidden());
}

/// Reads the target path and returns its entries sorted byte-wise ascending.
///
/// A directory yields its children plus `.` and `..`.
/// Anything else yields one entry for the path itself; a dangling symlink counts as a file.
///
/// # Errors
/// [ListError::PathNotFound] when the path does not exist, [ListError::PermissionDenied]
/// when the directory cannot be read.
pub fn enumerate(path: &Path) -> ListResult<Listing> {
    let is_dir = match fs::metadata(path) {
        Ok(md) => md.is_dir(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // lstat succeeds for a link whose target is gone
            fs::symlink_metadata(path).map_err(|e| ListError::from_io(path, e))?;
            false
        }
        Err(e) => return Err(ListError::from_io(path, e)),
    };

    if !is_dir {
        let entry = single_entry(path);
        log::debug!("listing single entry {:?}", entry.path());
        return Ok(Listing {
            entries: vec![entry],
            from_directory: false,
        });
    }

    let mut entries = vec![Entry::new(".", path), Entry::new("..", path)];
    for dir_entry in fs::read_dir(path).map_err(|e| ListError::from_io(path, e))? {
        let dir_entry = dir_entry.map_err(|e| ListError::from_io(path, e))?;
        entries.push(Entry::new(dir_entry.file_name(), path));
    }
    sort_entries(&mut entries);
    log::debug!("read {} entries from {}", entries.len(), path.display());

    Ok(Listing {
        entries,
        from_directory: true,
    })
}

/// Sorts entries by the raw bytes of their names.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
}

fn single_entry(path: &Path) -> Entry {
    match path.file_name() {
        Some(name) => Entry::new(name, path.parent().unwrap_or_else(|| Path::new(""))),
        // paths like `..` or `/` have no file name component
        None => Entry::new(path.as_os_str(), PathBuf::new()),
    }
}
