//! The immutable catalog store.

use crate::assets::Builtins;
use crate::error::{ErrorKind, Result};
use crate::models::{AuthorId, Book, GenreId};
use exn::ResultExt;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::instrument;

/// On-disk shape of a catalog document.
#[derive(Deserialize)]
struct Document {
    books: Vec<Book>,
    #[serde(default)]
    authors: BTreeMap<AuthorId, String>,
    #[serde(default)]
    genres: BTreeMap<GenreId, String>,
}

/// The full collection of books plus the author and genre name mappings.
///
/// Loaded once at startup and never mutated afterwards. Book order is the
/// catalog order that every filtered view preserves. Author and genre
/// mappings iterate in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
}
impl Catalog {
    /// Builds a catalog from already-loaded parts.
    ///
    /// Integrity problems (duplicate book ids, references to unknown authors or
    /// genres) are logged but tolerated: an unknown id never matches a filter
    /// and a duplicate id resolves to its first occurrence.
    pub fn new(
        books: Vec<Book>,
        authors: impl Into<BTreeMap<AuthorId, String>>,
        genres: impl Into<BTreeMap<GenreId, String>>,
    ) -> Self {
        let catalog = Self { books, authors: authors.into(), genres: genres.into() };
        catalog.audit();
        catalog
    }

    /// Parses a catalog from a JSON document.
    #[instrument(skip(json), fields(json_size = json.as_ref().len()))]
    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self> {
        let document: Document =
            serde_json::from_slice(json.as_ref()).or_raise(|| ErrorKind::Malformed("invalid JSON document".into()))?;
        let catalog = Self::new(document.books, document.authors, document.genres);
        tracing::debug!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Reads and parses a catalog JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).or_raise(|| ErrorKind::Io)?;
        Self::from_json(bytes)
    }

    /// The sample catalog embedded at compile time.
    pub fn builtin() -> Result<Self> {
        Self::from_json(Builtins::load(Builtins::SAMPLE)?)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &BTreeMap<AuthorId, String> {
        &self.authors
    }

    pub fn genres(&self) -> &BTreeMap<GenreId, String> {
        &self.genres
    }

    pub fn author_name(&self, id: &AuthorId) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    pub fn genre_name(&self, id: &GenreId) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn audit(&self) {
        let mut seen = HashSet::with_capacity(self.books.len());
        for book in &self.books {
            if !seen.insert(&book.id) {
                tracing::warn!(id = %book.id, "Duplicate book id in catalog; lookups resolve to the first entry");
            }
            if !self.authors.contains_key(&book.author_id) {
                tracing::warn!(id = %book.id, author = %book.author_id, "Book references an unknown author");
            }
            for genre in book.genre_ids.iter().filter(|g| !self.genres.contains_key(*g)) {
                tracing::warn!(id = %book.id, genre = %genre, "Book references an unknown genre");
            }
        }
    }
}
impl AsRef<[Book]> for Catalog {
    fn as_ref(&self) -> &[Book] {
        &self.books
    }
}
