//! In-memory list of tracked books. A book's position is its only identity:
//! the user sees it as a 1-based display id, and deleting an entry shifts
//! every later entry down by one.

use crate::models::Book;

/// Placeholder shown in the listing when nothing is tracked.
pub const EMPTY_LISTING: &str = "No books in progress";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book and return its display id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        actual_page: i64,
        last_read_date: impl Into<String>,
    ) -> usize {
        self.books.push(Book::new(name, actual_page, last_read_date));
        self.books.len()
    }

    /// Remove the book shown as `display_id`. Out-of-range ids leave the
    /// collection untouched and return `None`; callers report the error.
    pub fn delete_at(&mut self, display_id: usize) -> Option<Book> {
        if !self.contains_id(display_id) {
            return None;
        }
        Some(self.books.remove(display_id - 1))
    }

    pub fn get(&self, display_id: usize) -> Option<&Book> {
        display_id
            .checked_sub(1)
            .and_then(|index| self.books.get(index))
    }

    pub fn contains_id(&self, display_id: usize) -> bool {
        (1..=self.books.len()).contains(&display_id)
    }

    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Lines for the listing pane, or the placeholder when empty.
    pub fn listing_lines(&self) -> Vec<String> {
        if self.books.is_empty() {
            return vec![EMPTY_LISTING.to_string()];
        }
        self.books
            .iter()
            .enumerate()
            .map(|(index, book)| book.listing_line(index + 1))
            .collect()
    }
}

impl From<Vec<Book>> for BookCollection {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_books() -> BookCollection {
        let mut books = BookCollection::new();
        books.add("Dune", 42, "01 Jan 2026");
        books.add("Emma", 10, "02 Jan 2026");
        books.add("Ulysses", 300, "03 Jan 2026");
        books
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut books = three_books();
        let id = books.add("Dune", 1, "04 Jan 2026");

        assert_eq!(id, 4);
        assert_eq!(books.len(), 4);
        assert_eq!(books.all().last(), Some(&Book::new("Dune", 1, "04 Jan 2026")));
    }

    #[test]
    fn delete_shifts_later_ids_down() {
        let mut books = three_books();
        let removed = books.delete_at(2);

        assert_eq!(removed.map(|book| book.name), Some("Emma".to_string()));
        assert_eq!(books.len(), 2);
        assert_eq!(books.get(2).map(|book| book.name.as_str()), Some("Ulysses"));
        assert_eq!(
            books.listing_lines()[1],
            "[2] Ulysses (current page: 300, last read: 03 Jan 2026)"
        );
    }

    #[test]
    fn delete_out_of_range_is_a_no_op() {
        let mut books = three_books();
        let before = books.clone();

        assert_eq!(books.delete_at(0), None);
        assert_eq!(books.delete_at(4), None);
        assert_eq!(books, before);
    }

    #[test]
    fn empty_listing_shows_placeholder() {
        let books = BookCollection::new();
        assert!(books.is_empty());
        assert_eq!(books.listing_lines(), vec![EMPTY_LISTING.to_string()]);
        assert_eq!(books.get(1), None);
    }
}
