//! Input state for the right-hand form: three text fields and three buttons
//! sharing one focus ring. Validation lives here too, so the controller only
//! decides what to do with a parsed value or an `InputError`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use thiserror::Error;

/// Every focusable item in the form, in tab order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FormItem {
    #[default]
    Name,
    Page,
    DeleteId,
    AddButton,
    DeleteButton,
    QuitButton,
}

impl FormItem {
    pub const ALL: [FormItem; 6] = [
        FormItem::Name,
        FormItem::Page,
        FormItem::DeleteId,
        FormItem::AddButton,
        FormItem::DeleteButton,
        FormItem::QuitButton,
    ];

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|item| *item == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    pub fn is_input(self) -> bool {
        matches!(self, FormItem::Name | FormItem::Page | FormItem::DeleteId)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormItem::Name => "Book name",
            FormItem::Page => "Last page",
            FormItem::DeleteId => "Book ID to delete",
            FormItem::AddButton => "Add",
            FormItem::DeleteButton => "Delete",
            FormItem::QuitButton => "Quit",
        }
    }
}

/// Validation faults. These never leave the controller; they are shown as
/// inline notes under the listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid value.")]
    InvalidBook,
    #[error("Please enter a valid Id.")]
    MissingId,
    #[error("Invalid Id.")]
    InvalidId,
}

/// Text of the three inputs plus which item has focus.
#[derive(Default, Clone, Debug)]
pub struct BookForm {
    pub name: String,
    pub page: String,
    pub delete_id: String,
    pub focus: FormItem,
}

impl BookForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    fn field_mut(&mut self, item: FormItem) -> Option<&mut String> {
        match item {
            FormItem::Name => Some(&mut self.name),
            FormItem::Page => Some(&mut self.page),
            FormItem::DeleteId => Some(&mut self.delete_id),
            _ => None,
        }
    }

    pub fn value(&self, item: FormItem) -> &str {
        match item {
            FormItem::Name => &self.name,
            FormItem::Page => &self.page,
            FormItem::DeleteId => &self.delete_id,
            _ => "",
        }
    }

    /// Append a character to the focused input. Returns false when focus is
    /// on a button or the character is a control code.
    pub fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.field_mut(self.focus) {
            Some(field) => {
                field.push(ch);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.field_mut(self.focus) {
            field.pop();
        }
    }

    /// Validate the add inputs: a non-empty name and an integer page. The
    /// name is kept exactly as typed.
    pub fn parse_book(&self) -> Result<(String, i64), InputError> {
        if self.name.is_empty() {
            return Err(InputError::InvalidBook);
        }
        let page = self
            .page
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::InvalidBook)?;
        Ok((self.name.clone(), page))
    }

    /// Validate the delete id against the current number of books.
    pub fn parse_delete_id(&self, len: usize) -> Result<usize, InputError> {
        let raw = self.delete_id.trim();
        if raw.is_empty() {
            return Err(InputError::MissingId);
        }
        match raw.parse::<usize>() {
            Ok(id) if (1..=len).contains(&id) => Ok(id),
            _ => Err(InputError::InvalidId),
        }
    }

    pub fn clear_book(&mut self) {
        self.name.clear();
        self.page.clear();
    }

    pub fn clear_delete_id(&mut self) {
        self.delete_id.clear();
    }

    /// Render one labeled input, highlighting it when focused.
    pub(crate) fn build_input_line(&self, item: FormItem) -> Line<'static> {
        let style = if self.focus == item {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{}: ", item.label()), style.add_modifier(Modifier::BOLD)),
            Span::styled(self.value(item).to_string(), style),
        ])
    }

    /// Render the button row.
    pub(crate) fn build_button_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for item in FormItem::ALL.iter().copied().filter(|item| !item.is_input()) {
            let style = if self.focus == item {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Black).bg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", item.label()), style));
            spans.push(Span::raw("  "));
        }
        spans.pop();
        Line::from(spans)
    }

    /// Cursor column offset inside the form for the focused input.
    pub(crate) fn cursor_offset(&self, item: FormItem) -> usize {
        item.label().chars().count() + 2 + self.value(item).chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn focus_cycles_through_every_item_and_wraps() {
        let mut form = BookForm::default();
        let mut seen = vec![form.focus];
        for _ in 0..FormItem::ALL.len() {
            form.focus_next();
            seen.push(form.focus);
        }
        assert_eq!(&seen[..6], &FormItem::ALL[..]);
        assert_eq!(seen[6], FormItem::Name);

        form.focus_previous();
        assert_eq!(form.focus, FormItem::QuitButton);
    }

    #[test]
    fn typing_goes_to_the_focused_input_only() {
        let mut form = BookForm::default();
        assert!(form.push_char('D'));
        form.focus = FormItem::Page;
        assert!(form.push_char('4'));
        form.focus = FormItem::AddButton;
        assert!(!form.push_char('x'));

        assert_eq!(form.name, "D");
        assert_eq!(form.page, "4");
        assert_eq!(form.delete_id, "");
    }

    #[test]
    fn parse_book_rejects_empty_name_and_non_numeric_page() {
        let mut form = BookForm {
            name: String::new(),
            page: "12".into(),
            ..BookForm::default()
        };
        assert_eq!(form.parse_book(), Err(InputError::InvalidBook));

        form.name = "Dune".into();
        form.page = "twelve".into();
        assert_eq!(form.parse_book(), Err(InputError::InvalidBook));

        form.page = " 12 ".into();
        assert_eq!(form.parse_book(), Ok(("Dune".to_string(), 12)));
    }

    #[test]
    fn parse_book_keeps_the_name_as_typed() {
        let form = BookForm {
            name: "  Dune ".into(),
            page: "3".into(),
            ..BookForm::default()
        };
        assert_eq!(form.parse_book(), Ok(("  Dune ".to_string(), 3)));

        let spaces = BookForm {
            name: "   ".into(),
            page: "3".into(),
            ..BookForm::default()
        };
        assert_eq!(spaces.parse_book(), Ok(("   ".to_string(), 3)));
    }

    #[test]
    fn parse_delete_id_distinguishes_missing_from_invalid() {
        let mut form = BookForm::default();
        assert_eq!(form.parse_delete_id(3), Err(InputError::MissingId));

        for raw in ["0", "4", "-1", "two"] {
            form.delete_id = raw.into();
            assert_eq!(form.parse_delete_id(3), Err(InputError::InvalidId), "{raw}");
        }

        form.delete_id = "3".into();
        assert_eq!(form.parse_delete_id(3), Ok(3));
    }
}
