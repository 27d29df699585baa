//! JSON file persistence for the tracked books. The whole list is the unit of
//! storage: `load` runs once at startup and `save` rewrites the file after
//! every add or delete, so there is never a partial or incremental write to
//! reconcile. The on-disk shape is a pretty-printed array of `Book` objects
//! with two-space indentation.
//!
//! A missing or blank file is the normal first-run state and loads as an
//! empty list. Anything else that goes wrong (unreadable file, malformed
//! JSON, failed write) comes back as a `StoreError` and ends the process.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::Book;

use super::StoreError;

/// Whole-file JSON store. Every save rewrites the file from scratch; there is
/// no temp-file rename, so a crash mid-write can leave a truncated file.
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Point the store at a file. Nothing is touched on disk until `load` or
    /// `save` runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored book. A missing or blank file means nothing has been
    /// tracked yet and yields an empty list.
    pub fn load(&self) -> Result<Vec<Book>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no books file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if data.trim().is_empty() {
            debug!(path = %self.path.display(), "books file is blank");
            return Ok(Vec::new());
        }

        let books: Vec<Book> =
            serde_json::from_str(&data).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), count = books.len(), "loaded books");
        Ok(books)
    }

    /// Overwrite the file with the full list as two-space indented JSON.
    pub fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(books).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, data).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = books.len(), "saved books");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = BookStore::new(dir.path().join("books.json"));
        assert_eq!(store.load().unwrap(), Vec::<Book>::new());
    }

    #[test]
    fn blank_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(BookStore::new(path).load().unwrap(), Vec::<Book>::new());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = BookStore::new(dir.path().join("nested").join("books.json"));
        store.save(&[Book::new("Dune", 1, "01 Jan 2026")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn directory_in_place_of_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let store = BookStore::new(dir.path());
        assert!(matches!(store.load(), Err(StoreError::Read { .. })));
    }
}
