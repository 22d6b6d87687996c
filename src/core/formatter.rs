//! Long-format report for colls.
//!
//! Turns a list of [MetadataRecord]s into the `total` header plus one aligned line per entry.
//! Numeric and identity columns are right-aligned to the widest value in the listing.

use crate::core::metadata::MetadataRecord;

use chrono::{DateTime, Local};

/// The hardlink column is never narrower than this.
const MIN_HARDLINK_WIDTH: usize = 2;

/// Column widths for one long listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongColumns {
    pub hardlinks: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
}

impl LongColumns {
    /// Widest value of each column across `records`.
    pub fn measure(records: &[MetadataRecord]) -> Self {
        records.iter().fold(
            LongColumns {
                hardlinks: MIN_HARDLINK_WIDTH,
                owner: 0,
                group: 0,
                size: 0,
            },
            |acc, r| LongColumns {
                hardlinks: acc.hardlinks.max(digits(r.hardlinks)),
                owner: acc.owner.max(r.owner.chars().count()),
                group: acc.group.max(r.group.chars().count()),
                size: acc.size.max(digits(r.size)),
            },
        )
    }
}

fn digits(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Sum of the block counts of every record.
pub fn total_blocks(records: &[MetadataRecord]) -> u64 {
    records.iter().map(|r| r.blocks).sum()
}

/// Formats a modification time (seconds since the epoch) as `<month> <day> <hour>:<minute>`
/// in local time, with month and day padded by spaces, e.g. ` 3  5 09:07`.
///
/// Timestamps outside the calendar range chrono can represent are printed as raw seconds.
pub fn format_file_time(modified: i64) -> String {
    match DateTime::from_timestamp(modified, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%_m %e %H:%M")
            .to_string(),
        None => modified.to_string(),
    }
}

/// Formats one record against precomputed column widths.
///
/// With `dir_marker` set, directory names get a trailing `/`.
pub fn format_long_line(record: &MetadataRecord, cols: &LongColumns, dir_marker: bool) -> String {
    let mut name = record.name.to_string_lossy().into_owned();
    if dir_marker && record.is_dir() && !name.ends_with('/') {
        name.push('/');
    }
    format!(
        "{:>10} {:>lw$} {:>ow$}  {:>gw$}  {:>sw$} {} {}",
        record.mode_string(),
        record.hardlinks,
        record.owner,
        record.group,
        record.size,
        format_file_time(record.modified),
        name,
        lw = cols.hardlinks,
        ow = cols.owner,
        gw = cols.group,
        sw = cols.size,
    )
}

/// Renders the full long report: the `total` header followed by one line per record.
pub fn long_lines(records: &[MetadataRecord], dir_marker: bool) -> Vec<String> {
    let cols = LongColumns::measure(records);
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format!("total {}", total_blocks(records)));
    lines.extend(
        records
            .iter()
            .map(|r| format_long_line(r, &cols, dir_marker)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::EntryKind;
    use chrono::TimeZone;
    use std::ffi::OsString;

    fn record(name: &str, kind: EntryKind, blocks: u64) -> MetadataRecord {
        MetadataRecord {
            name: OsString::from(name),
            kind,
            permission: "rw-r--r--".to_string(),
            hardlinks: 1,
            owner: "alice".to_string(),
            group: "staff".to_string(),
            size: 42,
            modified: 0,
            blocks,
        }
    }

    #[test]
    fn total_is_sum_of_blocks() {
        let records = vec![
            record("a", EntryKind::Regular, 8),
            record("b", EntryKind::Regular, 16),
        ];
        let lines = long_lines(&records, true);
        assert_eq!(lines[0], "total 24");
        assert_eq!(lines.len(), 3);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(total_blocks(&reversed), 24);
    }

    #[test]
    fn empty_listing_has_only_header() {
        assert_eq!(long_lines(&[], true), ["total 0"]);
    }

    #[test]
    fn column_widths() {
        let mut big = record("big", EntryKind::Regular, 0);
        big.hardlinks = 1234;
        big.size = 1_048_576;
        big.owner = "root".to_string();
        big.group = "wheel".to_string();
        let mut small = record("small", EntryKind::Regular, 0);
        small.owner = "nobody".to_string();
        small.group = "nogroup".to_string();
        small.size = 0;

        let cols = LongColumns::measure(&[big, small]);
        assert_eq!(
            cols,
            LongColumns {
                hardlinks: 4,
                owner: 6,
                group: 7,
                size: 7,
            }
        );

        let cols = LongColumns::measure(&[record("x", EntryKind::Regular, 0)]);
        assert_eq!(cols.hardlinks, MIN_HARDLINK_WIDTH);
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(u64::MAX), 20);
    }

    #[test]
    fn time_is_space_padded() -> Result<(), Box<dyn std::error::Error>> {
        let dt = Local
            .with_ymd_and_hms(2024, 3, 5, 9, 7, 0)
            .earliest()
            .ok_or("local time does not exist")?;
        assert_eq!(format_file_time(dt.timestamp()), " 3  5 09:07");

        let dt = Local
            .with_ymd_and_hms(2023, 11, 28, 23, 59, 0)
            .earliest()
            .ok_or("local time does not exist")?;
        assert_eq!(format_file_time(dt.timestamp()), "11 28 23:59");
        Ok(())
    }

    #[test]
    fn time_out_of_calendar_range_prints_seconds() {
        assert_eq!(format_file_time(10_000_000_000_000), "10000000000000");
        assert_eq!(format_file_time(i64::MIN), i64::MIN.to_string());

        let mut rec = record("future", EntryKind::Regular, 0);
        rec.modified = i64::MAX;
        let lines = long_lines(&[rec], true);
        assert!(lines[1].ends_with(&format!(" {} future", i64::MAX)));
    }

    #[test]
    fn long_line_layout() {
        let rec = record("notes.txt", EntryKind::Regular, 8);
        let cols = LongColumns::measure(std::slice::from_ref(&rec));
        let line = format_long_line(&rec, &cols, true);
        let time = format_file_time(0);
        assert_eq!(line, format!("-rw-r--r--  1 alice  staff  42 {} notes.txt", time));
    }

    #[test]
    fn directory_marker_is_optional() {
        let mut dir = record("src", EntryKind::Directory, 0);
        dir.permission = "rwxr-xr-x".to_string();
        let cols = LongColumns::measure(std::slice::from_ref(&dir));

        let marked = format_long_line(&dir, &cols, true);
        assert!(marked.starts_with("drwxr-xr-x"));
        assert!(marked.ends_with(" src/"));

        let plain = format_long_line(&dir, &cols, false);
        assert!(plain.ends_with(" src"));

        // symlinks to directories are links, not directories
        let link = record("lnk", EntryKind::Symlink, 0);
        assert!(format_long_line(&link, &cols, true).ends_with(" lnk"));
    }
}
