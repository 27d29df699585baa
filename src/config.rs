//! File locations used by the tracker. Both are plain names resolved against
//! the working directory; there are no flags or environment overrides.

use std::path::PathBuf;

/// Data file holding every tracked book.
pub const BOOKS_FILE_NAME: &str = "books.json";
/// Diagnostics go here because the terminal is owned by the UI.
pub const LOG_FILE_NAME: &str = "books.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub books_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books_path: PathBuf::from(BOOKS_FILE_NAME),
            log_path: PathBuf::from(LOG_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative_to_the_working_directory() {
        let config = Config::default();
        assert!(config.books_path.is_relative());
        assert_eq!(config.books_path, PathBuf::from("books.json"));
        assert_eq!(config.log_path, PathBuf::from("books.log"));
    }
}
