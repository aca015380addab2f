//! The folio book catalog.
//!
//! A [`Catalog`] is the immutable set of [`Book`](models::Book) records plus
//! the author and genre name mappings they reference. It is loaded once (from
//! a JSON file, or the embedded sample via [`Catalog::builtin`]) and only ever
//! read afterwards.

mod assets;
pub mod error;
pub mod models;
mod store;

pub use crate::store::Catalog;
