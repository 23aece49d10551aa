//! Canonical timestamp formats.
//!
//! Log lines and scorecard headers use `YYYY-MM-DD HH:MM:SS`; default
//! artifact file names embed the compact `YYYYMMDD-HHMMSS` form so
//! concurrent runs never clobber each other's output.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// Log-line timestamp: `2026-02-05 15:10:13`.
pub fn format_stamp(t: OffsetDateTime) -> String {
    t.format(&STAMP)
        .unwrap_or_else(|_| "0000-00-00 00:00:00".to_string())
}

/// File-name timestamp: `20260205-151013`.
pub fn format_file_stamp(t: OffsetDateTime) -> String {
    t.format(&FILE_STAMP)
        .unwrap_or_else(|_| "00000000-000000".to_string())
}
