use super::{AuthorId, BookId, GenreId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single catalog entry.
///
/// Books are immutable once loaded; identity is the [`BookId`]. Field names on
/// the wire follow the catalog data files (`author`, `genres`, `published`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    /// Display title, searched case-insensitively
    pub title: String,
    #[serde(rename = "author")]
    pub author_id: AuthorId,
    /// Genres in catalog order; a book may belong to several
    #[serde(rename = "genres", default)]
    pub genre_ids: Vec<GenreId>,
    /// Cover image URI, passed through untouched
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub published: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}
impl AsRef<Book> for Book {
    fn as_ref(&self) -> &Book {
        self
    }
}
impl Book {
    /// Year of publication, the only part of the date ever displayed.
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns `true` if the book is tagged with the given genre.
    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genre_ids.contains(genre)
    }
}
