//! Book data manager.
//!
//! Owns the backend-sourced collection together with a loading flag and an
//! error slot. The view layer never touches this state directly: it reads
//! through the accessors and mutates through `refresh`, `add` and `remove`.

use crate::config::Config;
use crate::errors::{self, ApiError};
use crate::models::{Book, NewBook};

pub struct BookManager {
    client: reqwest::Client,
    base_url: String,
    books: Vec<Book>,
    loading: bool,
    error: Option<String>,
}

impl BookManager {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            books: Vec::new(),
            loading: false,
            error: None,
        })
    }

    /// The collection as last confirmed by the backend, in server order
    /// with local adds appended.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Human-readable message of the most recent failure, cleared by the
    /// next successful operation.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-fetch the whole collection. On success the local collection is
    /// replaced wholesale; on failure it is left untouched and the error
    /// slot is filled. A stale error survives the start of the call and is
    /// only cleared once the fetch succeeds.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.fetch_books().await {
            Ok(books) => {
                tracing::debug!("fetched {} books", books.len());
                self.books = books;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(errors::report("fetch books", &err));
            }
        }
        self.loading = false;
    }

    /// Create a book on the backend and append the server's response (which
    /// carries the assigned id) to the collection. Returns the appended
    /// record, or None on failure.
    pub async fn add(&mut self, book: NewBook) -> Option<&Book> {
        self.loading = true;
        let result = self.post_book(&book).await;
        self.loading = false;

        match result {
            Ok(created) => {
                tracing::debug!("added book {} ({})", created.id, created.title);
                self.books.push(created);
                self.error = None;
                self.books.last()
            }
            Err(err) => {
                self.error = Some(errors::report("add book", &err));
                None
            }
        }
    }

    /// Delete a book by id. The response body is ignored; any 2xx counts.
    /// Returns whether a local entry was dropped; deleting an id the local
    /// collection never held is not an error.
    pub async fn remove(&mut self, id: i32) -> bool {
        self.loading = true;
        let result = self.delete_book(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                let before = self.books.len();
                self.books.retain(|b| b.id != id);
                self.error = None;
                tracing::debug!("removed book {}", id);
                self.books.len() < before
            }
            Err(err) => {
                self.error = Some(errors::report("remove book", &err));
                false
            }
        }
    }

    async fn fetch_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/books", self.base_url);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(errors::status_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn post_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        let url = format!("{}/books", self.base_url);
        let resp = self.client.post(&url).json(book).send().await?;

        if !resp.status().is_success() {
            return Err(errors::status_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    async fn delete_book(&self, id: i32) -> Result<(), ApiError> {
        let url = format!("{}/books/{}", self.base_url, id);
        let resp = self.client.delete(&url).send().await?;

        if !resp.status().is_success() {
            return Err(errors::status_error(resp).await);
        }

        Ok(())
    }
}
