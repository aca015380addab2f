//! View adapter for the catalog browser.
//!
//! [`View`] turns user [`Action`]s into page [`Update`]s by driving a
//! [`BrowseSession`](folio_browse::BrowseSession); [`Renderer`] projects the
//! results into HTML. Theming is a pair of CSS custom properties (see
//! [`Theme`]).

mod assets;
pub mod error;
mod style;
mod template;
mod view;

pub use crate::style::{CssVariables, Rgb, Theme, ThemePreference};
pub use crate::template::Renderer;
pub use crate::view::{ANY, Action, Detail, Overlay, Overlays, SearchForm, UNKNOWN_AUTHOR, Update, View};
