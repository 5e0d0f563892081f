//! Timestamp source and formatting
//!
//! Transaction dates and the balance's last-update stamp are stored as
//! display strings (`dd/mm/yyyy, HH:MM`). The [`Clock`] trait lets tests pin
//! the current time.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day]/[month]/[year], [hour]:[minute]");

/// Source of the current time
pub trait Clock {
    /// Current date and time
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in the local timezone
///
/// Falls back to UTC when the local offset cannot be determined (e.g. in a
/// multi-threaded process on some platforms).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        match UtcOffset::current_local_offset() {
            Ok(offset) => now.to_offset(offset),
            Err(_) => now,
        }
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Format a timestamp for display and storage
pub fn format_timestamp(at: OffsetDateTime) -> String {
    // Formatting only fails for components the format does not use
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| at.date().to_string())
}
