//! Controller and view for the tracker. `App` owns the book collection and
//! the store, turns key presses into add/delete/quit actions, and renders the
//! two panes. Each action runs to completion (validate, mutate, save,
//! refresh) before the terminal loop reads the next key, so the file on disk
//! always matches what the listing shows.
//!
//! The listing pane wraps long titles, so scrolling is measured in rendered
//! rows. `draw` records the pane's inner area each frame and the scroll limit
//! is derived from it.

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::collection::BookCollection;
use crate::models::today_stamp;
use crate::store::BookStore;

use super::forms::{BookForm, FormItem, InputError};

/// Rows reserved below the panes for key hints.
const FOOTER_HEIGHT: u16 = 2;
/// Lines moved per PageUp/PageDown in the listing pane.
const SCROLL_STEP: u16 = 5;

/// The three things a user can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    Quit,
}

/// Controller and view state. Owns the collection and the store; every
/// mutation is written to disk before the next key is read.
pub struct App {
    store: BookStore,
    books: BookCollection,
    form: BookForm,
    /// Validation and confirmation lines shown under the listing until the
    /// next successful action.
    notes: Vec<String>,
    /// First rendered row of the listing pane.
    scroll: u16,
    /// Inner area of the listing pane as of the last frame. Zero-sized until
    /// the first draw.
    listing_view: Rect,
    clock: fn() -> String,
}

impl App {
    pub fn new(store: BookStore, books: BookCollection) -> Self {
        Self {
            store,
            books,
            form: BookForm::default(),
            notes: Vec::new(),
            scroll: 0,
            listing_view: Rect::default(),
            clock: today_stamp,
        }
    }

    /// Replace the date source used to stamp new books.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    /// The listing pane contents: one line per book (or the placeholder)
    /// followed by any inline notes.
    pub fn listing(&self) -> Vec<String> {
        let mut lines = self.books.listing_lines();
        lines.extend(self.notes.iter().cloned());
        lines
    }

    /// Run one action to completion. Returns `true` when the app should exit.
    pub fn perform(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Add => self.submit_add()?,
            Action::Delete => self.submit_delete()?,
            Action::Quit => {
                info!("quit requested");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Validate the name/page inputs, append the book, and persist.
    pub fn submit_add(&mut self) -> Result<()> {
        let (name, page) = match self.form.parse_book() {
            Ok(parsed) => parsed,
            Err(err) => {
                self.note_error(err);
                return Ok(());
            }
        };

        let id = self.books.add(name, page, (self.clock)());
        self.persist().context("failed to save new book")?;
        info!(id, page, "book added");

        self.refresh();
        self.form.clear_book();
        Ok(())
    }

    /// Validate the id input, remove that book, and persist.
    pub fn submit_delete(&mut self) -> Result<()> {
        let id = match self.form.parse_delete_id(self.books.len()) {
            Ok(id) => id,
            Err(err) => {
                self.note_error(err);
                return Ok(());
            }
        };

        if self.books.delete_at(id).is_none() {
            return Ok(());
        }
        self.persist().context("failed to save after delete")?;
        info!(id, "book deleted");

        self.refresh();
        self.push_note(format!("Book [{id}] deleted."));
        self.form.clear_delete_id();
        Ok(())
    }

    /// Route one key press. Returns `true` once Quit has been activated.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_previous(),
            KeyCode::PageDown => self.scroll_listing(SCROLL_STEP as i32),
            KeyCode::PageUp => self.scroll_listing(-(SCROLL_STEP as i32)),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => match self.form.focus {
                FormItem::AddButton => return self.perform(Action::Add),
                FormItem::DeleteButton => return self.perform(Action::Delete),
                FormItem::QuitButton => return self.perform(Action::Quit),
                _ => self.form.focus_next(),
            },
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
        Ok(false)
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content_area);

        self.draw_listing(frame, panes[0]);
        self.draw_form(frame, panes[1]);

        if let Some(footer_area) = footer_area {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_listing(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Books in progress")
            .borders(Borders::ALL);
        self.listing_view = block.inner(area);
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = self
            .listing_paragraph()
            .block(block)
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    /// The wrapped listing without its border, shared by rendering and row
    /// counting.
    fn listing_paragraph(&self) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = self.listing().into_iter().map(Line::from).collect();
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("My Books").borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let mut lines = Vec::new();
        for item in FormItem::ALL.iter().copied().filter(|item| item.is_input()) {
            lines.push(self.form.build_input_line(item));
            lines.push(Line::from(""));
        }
        lines.push(self.form.build_button_line());
        frame.render_widget(Paragraph::new(lines), inner);

        if self.form.focus.is_input() {
            let row = match self.form.focus {
                FormItem::Name => 0,
                FormItem::Page => 2,
                _ => 4,
            };
            let column = self.form.cursor_offset(self.form.focus) as u16;
            let max_x = inner.x + inner.width.saturating_sub(1);
            let max_y = inner.y + inner.height.saturating_sub(1);
            frame.set_cursor_position(((inner.x + column).min(max_x), (inner.y + row).min(max_y)));
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints = Line::from(vec![
            Span::styled("[Tab/↑↓]", key_style),
            Span::raw(" Move   "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Next/Press   "),
            Span::styled("[PgUp/PgDn]", key_style),
            Span::raw(" Scroll list"),
        ]);
        frame.render_widget(Paragraph::new(hints), inner);
    }

    /// Largest scroll offset that still fills the pane. Before the first
    /// frame the pane size is unknown, so logical lines stand in for rows.
    fn max_scroll(&self) -> u16 {
        let view = self.listing_view;
        let rows = if view.width == 0 {
            self.listing().len()
        } else {
            self.listing_paragraph().line_count(view.width)
        };
        let max = rows.saturating_sub(usize::from(view.height.max(1)));
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    fn scroll_listing(&mut self, delta: i32) {
        let max = i32::from(self.max_scroll());
        let next = (i32::from(self.scroll) + delta).clamp(0, max);
        self.scroll = next as u16;
    }

    /// Append an inline note and scroll so it is on screen.
    fn push_note(&mut self, note: String) {
        self.notes.push(note);
        self.scroll = self.max_scroll();
    }

    /// Redraw the listing from the collection, dropping older notes.
    fn refresh(&mut self) {
        self.notes.clear();
    }

    fn note_error(&mut self, err: InputError) {
        debug!(%err, "input rejected");
        self.push_note(err.to_string());
    }

    fn persist(&self) -> Result<()> {
        self.store.save(self.books.all())?;
        Ok(())
    }
}
