//! Domain model for a tracked book. The struct is a plain data holder shared
//! by the store, the collection, and the listing pane; the serde attributes
//! pin the on-disk key names so files written by earlier versions of the
//! tracker keep loading.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar format used for the "last read" stamp, e.g. `07 Mar 2026`.
pub const READ_DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A book currently being read.
pub struct Book {
    /// Title as typed by the user. Duplicates are allowed.
    pub name: String,
    /// Last page reached. Stored as typed; negative values are not rejected.
    #[serde(rename = "actualpage")]
    pub actual_page: i64,
    /// Human-readable date of the last update, already formatted.
    #[serde(rename = "lastread")]
    pub last_read_date: String,
}

impl Book {
    pub fn new(name: impl Into<String>, actual_page: i64, last_read_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actual_page,
            last_read_date: last_read_date.into(),
        }
    }

    /// Render the listing line for this book at the given 1-based position.
    pub fn listing_line(&self, display_id: usize) -> String {
        format!(
            "[{}] {} (current page: {}, last read: {})",
            display_id, self.name, self.actual_page, self.last_read_date
        )
    }
}

/// Format a calendar date the way read stamps are stored.
pub fn format_read_date(date: NaiveDate) -> String {
    date.format(READ_DATE_FORMAT).to_string()
}

/// Today's local date as a read stamp.
pub fn today_stamp() -> String {
    format_read_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn listing_line_uses_display_id_and_all_fields() {
        let book = Book::new("Dune", 42, "07 Mar 2026");
        assert_eq!(
            book.listing_line(1),
            "[1] Dune (current page: 42, last read: 07 Mar 2026)"
        );
    }

    #[test]
    fn read_date_is_zero_padded_with_short_month() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_read_date(date), "07 Mar 2026");
    }

    #[test]
    fn serializes_with_legacy_key_names() {
        let book = Book::new("Dune", 42, "07 Mar 2026");
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Dune","actualpage":42,"lastread":"07 Mar 2026"}"#
        );
    }
}
