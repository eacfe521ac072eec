//! Catalogue view state: filter text plus the user's reading list.
//!
//! The collection itself always belongs to the data manager; this layer only
//! borrows it. The reading list holds owned copies, lives for the session,
//! and is never sent to the backend.

use crate::models::Book;

/// Pure projection of the books whose title, author or genre contains
/// `filter` case-insensitively. Order-preserving; an empty filter returns
/// everything. Recomputed per call; the collections here are tens of
/// items, not worth an index.
pub fn visible_books<'a>(books: &'a [Book], filter: &str) -> Vec<&'a Book> {
    let needle = filter.to_lowercase();
    books.iter().filter(|b| b.matches(&needle)).collect()
}

#[derive(Default)]
pub struct Catalogue {
    filter: String,
    reading_list: Vec<Book>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filter text. No validation; empty matches everything.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn visible<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        visible_books(books, &self.filter)
    }

    /// Copy the book with `id` onto the reading list. An unknown id is a
    /// silent no-op; selecting the same id again appends a second copy.
    pub fn select(&mut self, books: &[Book], id: i32) -> bool {
        match books.iter().find(|b| b.id == id) {
            Some(book) => {
                tracing::debug!("adding '{}' to reading list", book.title);
                self.reading_list.push(book.clone());
                true
            }
            None => {
                tracing::debug!("select ignored, no book with id {}", id);
                false
            }
        }
    }

    /// The selected books, in selection order.
    pub fn reading_list(&self) -> &[Book] {
        &self.reading_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "Book One".to_string(),
                author: "Author One".to_string(),
                genre: Some("Fantasy".to_string()),
            },
            Book {
                id: 2,
                title: "Book Two".to_string(),
                author: "Author Two".to_string(),
                genre: Some("Sci-Fi".to_string()),
            },
        ]
    }

    #[test]
    fn empty_filter_returns_the_collection_unchanged() {
        let books = sample();
        let visible = visible_books(&books, "");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, 1);
        assert_eq!(visible[1].id, 2);
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let books = sample();

        let by_title = visible_books(&books, "two");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 2);

        let by_author = visible_books(&books, "AUTHOR ONE");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, 1);

        let by_genre = visible_books(&books, "sci-fi");
        assert_eq!(by_genre.len(), 1);
        assert_eq!(by_genre[0].id, 2);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let books = sample();
        assert!(visible_books(&books, "horror").is_empty());
    }

    #[test]
    fn select_copies_the_book_onto_the_reading_list() {
        let books = sample();
        let mut catalogue = Catalogue::new();

        assert!(catalogue.select(&books, 2));
        assert_eq!(catalogue.reading_list().len(), 1);
        assert_eq!(catalogue.reading_list()[0].title, "Book Two");
    }

    #[test]
    fn select_does_not_deduplicate() {
        let books = sample();
        let mut catalogue = Catalogue::new();

        assert!(catalogue.select(&books, 1));
        assert!(catalogue.select(&books, 1));
        assert_eq!(catalogue.reading_list().len(), 2);
    }

    #[test]
    fn select_with_unknown_id_leaves_the_list_unchanged() {
        let books = sample();
        let mut catalogue = Catalogue::new();

        assert!(!catalogue.select(&books, 99));
        assert!(catalogue.reading_list().is_empty());
    }

    #[test]
    fn reading_list_is_independent_of_the_collection() {
        let mut books = sample();
        let mut catalogue = Catalogue::new();
        catalogue.select(&books, 1);

        books.clear();
        assert_eq!(catalogue.reading_list().len(), 1);
    }

    #[test]
    fn catalogue_filters_through_its_own_state() {
        let books = sample();
        let mut catalogue = Catalogue::new();
        catalogue.set_filter("two");

        let visible = catalogue.visible(&books);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }
}
