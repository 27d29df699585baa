//! Persistence module: the JSON file store and its error type.

mod error;
mod file;

pub use error::StoreError;
pub use file::BookStore;
