//! Catalog query engine.
//!
//! Answers "what should be visible now" over an immutable catalog:
//!
//! - [`apply_filter`] narrows the catalog by title, author and genre,
//!   preserving catalog order.
//! - [`visible_slice`] and [`next_page`] paginate the matches, cumulatively
//!   for a full render or incrementally for appending.
//! - [`find_by_id`] resolves a rendered item back to its book.
//!
//! All of these are pure. [`BrowseSession`] holds the one piece of mutable
//! state (the matches and the page counter) for an interactive session.
//! Nothing here can fail: no matches is an empty slice and an unknown id is
//! `None`.

mod filter;
mod page;
mod query;
mod session;

pub use crate::filter::Filter;
pub use crate::page::{DEFAULT_PAGE_SIZE, Increment, Visible, next_page, visible_slice};
pub use crate::query::{apply_filter, find_by_id};
pub use crate::session::{BrowseSession, BrowseState};
