//! The interactive page as a state machine.
//!
//! A host (browser glue, a test, the CLI) feeds user [`Action`]s into
//! [`View::dispatch`] and applies the returned [`Update`]s to whatever it is
//! displaying. All browsing logic is delegated to [`BrowseSession`]; the view
//! only adds the overlay flags, the theme and the detail panel.

use crate::style::Theme;
use folio_browse::{BrowseSession, Filter};
use folio_catalog::Catalog;
use folio_catalog::models::{Book, BookId};
use std::num::NonZeroUsize;
use tracing::instrument;

/// Form value standing for "no constraint" in the author and genre selects.
pub const ANY: &str = "any";
/// Shown in place of an author name the catalog does not know.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

pub(crate) fn author_label<'a>(catalog: &'a Catalog, book: &Book) -> &'a str {
    catalog.author_name(&book.author_id).unwrap_or(UNKNOWN_AUTHOR)
}

/// Raw values submitted from the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    /// Author id, or [`ANY`]
    pub author: String,
    /// Genre id, or [`ANY`]
    pub genre: String,
}
impl SearchForm {
    /// Blank and [`ANY`] mean "no constraint"; any other value is an id,
    /// taken verbatim.
    fn selection<T: From<String>>(value: &str) -> Option<T> {
        let trimmed = value.trim();
        (!trimmed.is_empty() && trimmed != ANY).then(|| T::from(value.to_string()))
    }
}
impl From<&SearchForm> for Filter {
    fn from(form: &SearchForm) -> Self {
        Filter {
            title: form.title.clone(),
            author: SearchForm::selection(&form.author),
            genre: SearchForm::selection(&form.genre),
        }
    }
}

/// Contents of the detail overlay for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub image: String,
    pub title: String,
    /// `Author (Year)`
    pub subtitle: String,
    pub description: String,
}
impl Detail {
    pub fn new(book: &Book, catalog: &Catalog) -> Self {
        Self {
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author_label(catalog, book), book.published_year()),
            description: book.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Search,
    Settings,
    Detail,
}

/// Open/closed state of each overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlays {
    pub search: bool,
    pub settings: bool,
    pub detail: bool,
}
impl Overlays {
    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Search => self.search,
            Overlay::Settings => self.settings,
            Overlay::Detail => self.detail,
        }
    }

    fn set(&mut self, overlay: Overlay, open: bool) {
        match overlay {
            Overlay::Search => self.search = open,
            Overlay::Settings => self.settings = open,
            Overlay::Detail => self.detail = open,
        }
    }
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenSearch,
    CancelSearch,
    SubmitSearch(SearchForm),
    OpenSettings,
    CancelSettings,
    SubmitSettings(Theme),
    ShowMore,
    /// A click inside the list. Holds the `data-preview` marker (if any) of
    /// every element on the event path, innermost first.
    Select(Vec<Option<BookId>>),
    CloseDetail,
}

/// A change the host should make to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update<'c> {
    /// Replace every rendered preview with these.
    ReplaceList(Vec<&'c Book>),
    /// Append these previews after the existing ones.
    AppendList(Vec<&'c Book>),
    ShowMore { remaining: usize, disabled: bool },
    NoResults(bool),
    ScrollToTop,
    Overlay(Overlay, bool),
    FocusSearchTitle,
    Theme(Theme),
    Detail(Detail),
}

pub struct View<'c> {
    catalog: &'c Catalog,
    session: BrowseSession<'c>,
    form: SearchForm,
    theme: Theme,
    overlays: Overlays,
    detail: Option<Detail>,
}
impl<'c> View<'c> {
    pub fn new(catalog: &'c Catalog, page_size: NonZeroUsize, theme: Theme) -> Self {
        Self {
            catalog,
            session: BrowseSession::new(catalog.books(), page_size),
            form: SearchForm { author: ANY.into(), genre: ANY.into(), ..Default::default() },
            theme,
            overlays: Overlays::default(),
            detail: None,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn session(&self) -> &BrowseSession<'c> {
        &self.session
    }

    /// The most recently submitted search form.
    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn overlays(&self) -> Overlays {
        self.overlays
    }

    /// The last selected book's details; shown only while the detail overlay
    /// is open.
    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    /// State of the "show more" button.
    pub fn show_more(&self) -> Update<'c> {
        let remaining = self.session.remaining();
        Update::ShowMore { remaining, disabled: remaining < 1 }
    }

    /// Applies one user action, returning the page changes it causes.
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Vec<Update<'c>> {
        match action {
            Action::OpenSearch => {
                vec![self.toggle(Overlay::Search, true), Update::FocusSearchTitle]
            },
            Action::CancelSearch => vec![self.toggle(Overlay::Search, false)],
            Action::OpenSettings => vec![self.toggle(Overlay::Settings, true)],
            Action::CancelSettings => vec![self.toggle(Overlay::Settings, false)],
            Action::CloseDetail => vec![self.toggle(Overlay::Detail, false)],
            Action::SubmitSearch(form) => {
                let filter = Filter::from(&form);
                self.form = form;
                let items = self.session.apply_filter(&filter).items.to_vec();
                let no_results = self.session.matches().is_empty();
                vec![
                    Update::NoResults(no_results),
                    Update::ReplaceList(items),
                    self.show_more(),
                    Update::ScrollToTop,
                    self.toggle(Overlay::Search, false),
                ]
            },
            Action::ShowMore => {
                let items = self.session.next_page().to_vec();
                vec![Update::AppendList(items), self.show_more()]
            },
            Action::SubmitSettings(theme) => {
                self.theme = theme;
                vec![Update::Theme(theme), self.toggle(Overlay::Settings, false)]
            },
            Action::Select(path) => {
                let Some(book) = path.into_iter().flatten().find_map(|id| self.session.find_by_id(&id)) else {
                    tracing::debug!("Selection did not resolve to a book; ignoring");
                    return Vec::new();
                };
                let detail = Detail::new(book, self.catalog);
                self.detail = Some(detail.clone());
                vec![Update::Detail(detail), self.toggle(Overlay::Detail, true)]
            },
        }
    }

    fn toggle(&mut self, overlay: Overlay, open: bool) -> Update<'c> {
        self.overlays.set(overlay, open);
        Update::Overlay(overlay, open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::catalog;
    use folio_catalog::models::{AuthorId, GenreId};
    use rstest::rstest;

    fn view(catalog: &Catalog) -> View<'_> {
        View::new(catalog, NonZeroUsize::new(2).unwrap(), Theme::Day)
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.to_string()).collect()
    }

    #[rstest]
    #[case("", "any", "any", Filter::any())]
    #[case("The", "any", "", Filter::any().with_title("The"))]
    #[case("", " any ", "  ", Filter::any())]
    #[case("", " a1 ", "any", Filter::any().with_author(AuthorId::new(" a1 ")))]
    #[case("", "any", "fantasy", Filter::any().with_genre(GenreId::new("fantasy")))]
    fn test_form_to_filter(#[case] title: &str, #[case] author: &str, #[case] genre: &str, #[case] expected: Filter) {
        let form = SearchForm { title: title.into(), author: author.into(), genre: genre.into() };
        assert_eq!(Filter::from(&form), expected);
    }

    #[test]
    fn test_open_search_focuses_title() {
        let catalog = catalog();
        let mut view = view(&catalog);
        let updates = view.dispatch(Action::OpenSearch);
        assert_eq!(updates, vec![Update::Overlay(Overlay::Search, true), Update::FocusSearchTitle]);
        assert!(view.overlays().search);
        view.dispatch(Action::CancelSearch);
        assert!(!view.overlays().is_open(Overlay::Search));
    }

    #[test]
    fn test_submit_search() {
        let catalog = catalog();
        let mut view = view(&catalog);
        view.dispatch(Action::OpenSearch);
        let form = SearchForm { genre: "fantasy".into(), author: ANY.into(), ..Default::default() };
        let updates = view.dispatch(Action::SubmitSearch(form.clone()));

        assert_eq!(updates[0], Update::NoResults(false));
        let Update::ReplaceList(items) = &updates[1] else { panic!("expected list replacement") };
        assert_eq!(ids(items), ["2", "5"]);
        assert_eq!(updates[2], Update::ShowMore { remaining: 0, disabled: true });
        assert_eq!(updates[3], Update::ScrollToTop);
        assert_eq!(updates[4], Update::Overlay(Overlay::Search, false));
        assert_eq!(view.form(), &form);
    }

    #[test]
    fn test_padded_author_id_is_not_trimmed() {
        let catalog = catalog();
        let mut view = view(&catalog);
        let form = SearchForm { author: " a1 ".into(), genre: ANY.into(), ..Default::default() };
        let updates = view.dispatch(Action::SubmitSearch(form));
        assert_eq!(updates[0], Update::NoResults(true));
        assert!(view.session().matches().is_empty());
    }

    #[test]
    fn test_submit_search_without_results() {
        let catalog = catalog();
        let mut view = view(&catalog);
        let form = SearchForm { title: "zzz-nomatch".into(), ..Default::default() };
        let updates = view.dispatch(Action::SubmitSearch(form));
        assert_eq!(updates[0], Update::NoResults(true));
        assert_eq!(updates[1], Update::ReplaceList(vec![]));
        assert_eq!(updates[2], Update::ShowMore { remaining: 0, disabled: true });
    }

    #[test]
    fn test_show_more_until_exhausted() {
        let catalog = catalog();
        let mut view = view(&catalog);
        assert_eq!(view.show_more(), Update::ShowMore { remaining: 3, disabled: false });

        let updates = view.dispatch(Action::ShowMore);
        let Update::AppendList(items) = &updates[0] else { panic!("expected append") };
        assert_eq!(ids(items), ["3", "4"]);
        assert_eq!(updates[1], Update::ShowMore { remaining: 1, disabled: false });

        let updates = view.dispatch(Action::ShowMore);
        assert_eq!(updates[1], Update::ShowMore { remaining: 0, disabled: true });

        let updates = view.dispatch(Action::ShowMore);
        assert_eq!(updates[0], Update::AppendList(vec![]));
    }

    #[test]
    fn test_select_first_resolvable_marker() {
        let catalog = catalog();
        let mut view = view(&catalog);
        let path = vec![None, Some(BookId::new("404")), Some(BookId::new("3")), Some(BookId::new("1"))];
        let updates = view.dispatch(Action::Select(path));
        let Update::Detail(detail) = &updates[0] else { panic!("expected detail") };
        assert_eq!(detail.title, "Three");
        assert_eq!(detail.subtitle, "Author One (2020)");
        assert_eq!(updates[1], Update::Overlay(Overlay::Detail, true));
        assert_eq!(view.detail().map(|d| d.title.as_str()), Some("Three"));

        view.dispatch(Action::CloseDetail);
        assert!(!view.overlays().detail);
    }

    #[test]
    fn test_select_unknown_does_nothing() {
        let catalog = catalog();
        let mut view = view(&catalog);
        assert!(view.dispatch(Action::Select(vec![None, Some(BookId::new("404"))])).is_empty());
        assert!(view.dispatch(Action::Select(vec![])).is_empty());
        assert!(!view.overlays().detail);
        assert!(view.detail().is_none());
    }

    #[test]
    fn test_unknown_author_subtitle() {
        let catalog = catalog();
        let book = catalog.books().iter().find(|b| b.id.as_str() == "4").unwrap();
        assert_eq!(Detail::new(book, &catalog).subtitle, "Unknown author (2020)");
    }

    #[test]
    fn test_submit_settings() {
        let catalog = catalog();
        let mut view = view(&catalog);
        view.dispatch(Action::OpenSettings);
        let updates = view.dispatch(Action::SubmitSettings(Theme::Night));
        assert_eq!(updates, vec![Update::Theme(Theme::Night), Update::Overlay(Overlay::Settings, false)]);
        assert_eq!(view.theme(), Theme::Night);
    }
}
