//! Interactive browsing state.

use crate::filter::Filter;
use crate::page::{Visible, next_page, visible_slice};
use crate::query::{apply_filter, find_by_id};
use folio_catalog::models::{Book, BookId};
use std::num::NonZeroUsize;

/// What the user is currently looking at: the books matching the active
/// filter and how many pages of them have been revealed.
///
/// `matches` is always an ordered subsequence of the catalog and `page` is
/// never below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState<'c> {
    matches: Vec<&'c Book>,
    page: usize,
}
impl<'c> BrowseState<'c> {
    /// The initial state: every book, first page.
    pub fn new(books: &'c [Book]) -> Self {
        Self { matches: books.iter().collect(), page: 1 }
    }

    pub fn matches(&self) -> &[&'c Book] {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

/// Owns the [`BrowseState`] for a single browsing session over a borrowed
/// catalog, applying user actions one at a time.
#[derive(Debug, Clone)]
pub struct BrowseSession<'c> {
    books: &'c [Book],
    page_size: NonZeroUsize,
    state: BrowseState<'c>,
}
impl<'c> BrowseSession<'c> {
    pub fn new(books: &'c [Book], page_size: NonZeroUsize) -> Self {
        Self { books, page_size, state: BrowseState::new(books) }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn state(&self) -> &BrowseState<'c> {
        &self.state
    }

    pub fn matches(&self) -> &[&'c Book] {
        self.state.matches()
    }

    pub fn page(&self) -> usize {
        self.state.page()
    }

    /// Replaces the matches with the books satisfying `filter` and rewinds to
    /// the first page, returning what is now visible.
    pub fn apply_filter(&mut self, filter: &Filter) -> Visible<'_, &'c Book> {
        self.state = BrowseState { matches: apply_filter(self.books, filter), page: 1 };
        self.visible()
    }

    /// Reveals one more page, returning only the newly revealed books.
    pub fn next_page(&mut self) -> &[&'c Book] {
        let increment = next_page(&self.state.matches, self.state.page, self.page_size);
        self.state.page = increment.page;
        tracing::debug!(page = increment.page, revealed = increment.items.len(), "Revealed next page");
        increment.items
    }

    /// Everything revealed so far.
    pub fn visible(&self) -> Visible<'_, &'c Book> {
        visible_slice(&self.state.matches, self.state.page, self.page_size)
    }

    pub fn remaining(&self) -> usize {
        self.visible().remaining
    }

    pub fn has_more(&self) -> bool {
        self.visible().has_more()
    }

    /// Looks a book up across the whole catalog, regardless of the active
    /// filter.
    pub fn find_by_id(&self, id: &BookId) -> Option<&'c Book> {
        find_by_id(self.books, id)
    }
}
