//! Binary entry point: set up logging, load the saved books, and drive the
//! Ratatui event loop until the user quits.
use anyhow::Context;
use book_tracker::{init_logging, run_app, App, BookCollection, BookStore, Config};

/// Any error returned here is fatal: the terminal has already been restored,
/// so the diagnostic chain prints cleanly and the process exits non-zero.
fn main() -> anyhow::Result<()> {
    let config = Config::default();
    init_logging(&config.log_path)?;

    let store = BookStore::new(config.books_path.clone());
    let books = store.load().context("failed to load books")?;
    tracing::info!(count = books.len(), "starting book tracker");

    let mut app = App::new(store, BookCollection::from(books));
    run_app(&mut app).inspect_err(|err| tracing::error!("fatal error: {err:#}"))
}
