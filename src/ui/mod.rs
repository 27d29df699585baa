//! Ratatui front-end: a listing pane on the left and the add/delete form on
//! the right, driven by a crossterm key loop.

mod app;
mod forms;
mod terminal;

pub use app::{Action, App};
pub use forms::{BookForm, FormItem, InputError};
pub use terminal::run_app;
