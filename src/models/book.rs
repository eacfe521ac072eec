use serde::{Deserialize, Serialize};

/// A catalogued book as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
}

/// Payload for creating a book. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Book {
    /// Case-insensitive substring match against title, author and genre.
    /// `needle` must already be lowercased by the caller.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self
                .genre
                .as_ref()
                .is_some_and(|g| g.to_lowercase().contains(needle))
    }
}
