//! HTML rendering with [upon] templates.
//!
//! The builtin templates (see [`Templates`]) are compiled once in
//! [`Renderer::new`]. Every interpolated string is HTML-escaped (quotes
//! included, so values are safe inside attributes) except those passed
//! through the `raw` formatter, which is reserved for fragments this module
//! rendered itself.
//!
//! # Template Variables
//!
//! | Template          | Variables                                                    |
//! |-------------------|--------------------------------------------------------------|
//! | `preview.html`    | `id`, `image`, `title`, `author`                             |
//! | `show_more.html`  | `remaining`                                                  |
//! | `options.html`    | `all`, `options[].id`, `options[].name`, `options[].selected` |
//! | `document.html`   | `theme`, `items`, `no_results`, `show_more.{label,disabled}`, `overlays.{search,settings,detail}`, `form.title`, `genres`, `authors`, `night`, `detail.{image,title,subtitle,description}` |

use crate::assets::Templates;
use crate::error::{ErrorKind, Result};
use crate::style::Theme;
use crate::view::{Detail, Update, View, author_label};
use exn::ResultExt;
use folio_browse::Filter;
use folio_catalog::Catalog;
use folio_catalog::models::{AuthorId, Book, GenreId};
use std::collections::BTreeMap;
use tracing::instrument;
use upon::{Engine, Template, Value};

/// Renders books, controls and whole pages to HTML.
pub struct Renderer {
    engine: Engine<'static>,
    preview: Template<'static>,
    show_more: Template<'static>,
    options: Template<'static>,
    document: Template<'static>,
}
impl Renderer {
    /// Compiles every builtin template, failing fast on syntax errors.
    pub fn new() -> Result<Self> {
        tracing::debug!(templates = ?Templates::list(), "Compiling builtin templates");
        let mut engine = Engine::new();
        addons::configure(&mut engine);
        let compile = |name: &'static str| -> Result<Template<'static>> {
            engine.compile(Templates::load(name)?).or_raise(|| ErrorKind::Template(name))
        };
        let preview = compile("preview.html")?;
        let show_more = compile("show_more.html")?;
        let options = compile("options.html")?;
        let document = compile("document.html")?;
        Ok(Self { engine, preview, show_more, options, document })
    }

    /// A single preview button carrying the book's `data-preview` marker.
    pub fn preview(&self, book: &Book, catalog: &Catalog) -> Result<String> {
        let value = upon::value! {
            id: book.id.as_str(),
            image: book.image.as_str(),
            title: book.title.as_str(),
            author: author_label(catalog, book),
        };
        self.preview.render(&self.engine, value).to_string().or_raise(|| ErrorKind::Template("preview.html"))
    }

    /// Consecutive previews, in the order given.
    pub fn previews<'c>(&self, books: impl IntoIterator<Item = &'c Book>, catalog: &Catalog) -> Result<String> {
        books.into_iter().map(|book| self.preview(book, catalog)).collect()
    }

    /// Label of the "show more" button.
    pub fn show_more(&self, remaining: usize) -> Result<String> {
        let value = upon::value! { remaining: remaining as u64 };
        self.show_more.render(&self.engine, value).to_string().or_raise(|| ErrorKind::Template("show_more.html"))
    }

    /// `<option>`s for the author select, headed by "All Authors". The
    /// `selected` author, if any, is marked as such.
    pub fn author_options(&self, catalog: &Catalog, selected: Option<&AuthorId>) -> Result<String> {
        self.options_for("All Authors", catalog.authors(), selected.map(AuthorId::as_str))
    }

    /// `<option>`s for the genre select, headed by "All Genres".
    pub fn genre_options(&self, catalog: &Catalog, selected: Option<&GenreId>) -> Result<String> {
        self.options_for("All Genres", catalog.genres(), selected.map(GenreId::as_str))
    }

    fn options_for<K: AsRef<str>>(
        &self,
        all: &str,
        names: &BTreeMap<K, String>,
        selected: Option<&str>,
    ) -> Result<String> {
        let options = names
            .iter()
            .map(|(id, name)| {
                upon::value! {
                    id: id.as_ref(),
                    name: name.as_str(),
                    selected: selected == Some(id.as_ref()),
                }
            })
            .collect::<Vec<_>>();
        let value = upon::value! { all: all, options: Value::List(options) };
        self.options.render(&self.engine, value).to_string().or_raise(|| ErrorKind::Template("options.html"))
    }

    /// HTML for an [`Update`] that replaces or inserts markup, or `None` for
    /// updates that only toggle state.
    pub fn fragment(&self, update: &Update<'_>, catalog: &Catalog) -> Result<Option<String>> {
        Ok(match update {
            Update::ReplaceList(books) | Update::AppendList(books) => {
                Some(self.previews(books.iter().copied(), catalog)?)
            },
            Update::ShowMore { remaining, .. } => Some(self.show_more(*remaining)?),
            Update::Theme(theme) => Some(theme.variables().declarations()),
            _ => None,
        })
    }

    /// The whole page as it currently stands.
    #[instrument(skip_all, fields(page = view.session().page(), theme = %view.theme()))]
    pub fn document(&self, view: &View<'_>) -> Result<String> {
        let catalog = view.catalog();
        let visible = view.session().visible();
        let overlays = view.overlays();
        let detail = view.detail().filter(|_| overlays.detail);
        let filter = Filter::from(view.form());
        let value = upon::value! {
            theme: view.theme().variables().to_string(),
            items: self.previews(visible.items.iter().copied(), catalog)?,
            no_results: view.session().matches().is_empty(),
            show_more: upon::value! {
                label: self.show_more(visible.remaining)?,
                disabled: !visible.has_more(),
            },
            overlays: upon::value! {
                search: overlays.search,
                settings: overlays.settings,
                detail: overlays.detail,
            },
            form: upon::value! { title: view.form().title.as_str() },
            genres: self.genre_options(catalog, filter.genre.as_ref())?,
            authors: self.author_options(catalog, filter.author.as_ref())?,
            night: view.theme() == Theme::Night,
            detail: Self::detail_value(detail),
        };
        let html = self.document.render(&self.engine, value).to_string().or_raise(|| ErrorKind::Template("document.html"))?;
        tracing::debug!(bytes = html.len(), revealed = visible.items.len(), "Document rendered");
        Ok(html)
    }

    fn detail_value(detail: Option<&Detail>) -> Value {
        match detail {
            Some(d) => upon::value! {
                image: d.image.as_str(),
                title: d.title.as_str(),
                subtitle: d.subtitle.as_str(),
                description: d.description.as_str(),
            },
            None => upon::value! { image: "", title: "", subtitle: "", description: "" },
        }
    }
}

/// Custom [`upon`] extensions.
mod addons {
    use std::fmt::Write;
    use upon::{Engine, Value, fmt as upon_fmt};

    /// Escapes strings for use in element text and quoted attribute values.
    fn escape_formatter(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
        match value {
            Value::String(s) => write!(f, "{}", html_escape::encode_quoted_attribute(s))?,
            v => upon_fmt::default(f, v)?,
        };
        Ok(())
    }

    /// Writes strings without HTML escaping. Only for markup rendered by
    /// [`Renderer`](super::Renderer) itself.
    fn raw_formatter(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
        match value {
            Value::String(s) => write!(f, "{s}")?,
            v => upon_fmt::default(f, v)?,
        };
        Ok(())
    }

    pub(crate) fn configure(engine: &mut Engine<'_>) {
        engine.set_default_formatter(&escape_formatter);
        engine.add_formatter("raw", raw_formatter);
    }
}
