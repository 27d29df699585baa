//! Core library surface for the book tracker TUI.
//!
//! The binary only wires these pieces together, so integration tests can
//! drive the controller and the store without a terminal.
pub mod collection;
pub mod config;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

pub use collection::BookCollection;
pub use config::Config;
pub use logging::init_logging;
pub use models::Book;
pub use store::{BookStore, StoreError};

/// The interactive application entry point and state container.
pub use ui::{run_app, Action, App};
