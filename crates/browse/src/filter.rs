use folio_catalog::models::{AuthorId, Book, GenreId};

/// Search criteria for narrowing the catalog.
///
/// Every field defaults to "no constraint": an empty title and `None` for the
/// author and genre. A book matches when it satisfies all three at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Case-insensitive title substring. Whitespace-only counts as empty.
    pub title: String,
    pub author: Option<AuthorId>,
    /// Matches any book carrying this genre among its genres.
    pub genre: Option<GenreId>,
}
impl Filter {
    /// The identity filter, matching every book.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<Option<AuthorId>>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<Option<GenreId>>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Returns `true` if this filter places no constraint on any field.
    pub fn is_any(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_none() && self.genre.is_none()
    }

    /// Tests a single book against all three criteria.
    pub fn matches(&self, book: &Book) -> bool {
        Predicate::from(self).test(book)
    }
}

/// A [`Filter`] prepared for repeated evaluation (the title query is
/// lowercased once rather than per book).
pub(crate) struct Predicate<'f> {
    title: Option<String>,
    author: Option<&'f AuthorId>,
    genre: Option<&'f GenreId>,
}
impl<'f> From<&'f Filter> for Predicate<'f> {
    fn from(filter: &'f Filter) -> Self {
        let title = (!filter.title.trim().is_empty()).then(|| filter.title.to_lowercase());
        Self {
            title,
            author: filter.author.as_ref(),
            genre: filter.genre.as_ref(),
        }
    }
}
impl Predicate<'_> {
    pub(crate) fn test(&self, book: &Book) -> bool {
        self.title.as_ref().is_none_or(|q| book.title.to_lowercase().contains(q.as_str()))
            && self.author.is_none_or(|a| book.author_id == *a)
            && self.genre.is_none_or(|g| book.has_genre(g))
    }
}
