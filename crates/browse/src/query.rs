use crate::filter::{Filter, Predicate};
use folio_catalog::models::{Book, BookId};
use tracing::instrument;

/// Returns the books satisfying `filter`, in catalog order.
///
/// The result is always a subsequence of `books`. An empty result is a valid
/// outcome, not an error.
#[instrument(level = "debug", skip_all, fields(books = books.len(), ?filter))]
pub fn apply_filter<'c>(books: &'c [Book], filter: &Filter) -> Vec<&'c Book> {
    let predicate = Predicate::from(filter);
    let matches: Vec<_> = books.iter().filter(|book| predicate.test(book)).collect();
    tracing::debug!(matches = matches.len(), "Filter applied");
    matches
}

/// Finds the first book with the given id.
pub fn find_by_id<'c, B: AsRef<Book>>(books: &'c [B], id: &BookId) -> Option<&'c Book> {
    books.iter().map(AsRef::<Book>::as_ref).find(|book| book.id == *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{book, five_books};
    use folio_catalog::models::{AuthorId, GenreId};
    use proptest::prelude::*;

    fn ids<'a>(books: impl IntoIterator<Item = &'a &'a Book>) -> Vec<&'a str> {
        books.into_iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_identity_filter_returns_everything() {
        let books = five_books();
        let matches = apply_filter(&books, &Filter::any());
        assert_eq!(ids(&matches), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let books = vec![
            book("1", "The Hobbit", "a", &[]),
            book("2", "Dune", "a", &[]),
            book("3", "another theme", "a", &[]),
        ];
        let matches = apply_filter(&books, &Filter::any().with_title("the"));
        assert_eq!(ids(&matches), ["1", "3"]);
    }

    #[test]
    fn test_genre_filter_preserves_relative_order() {
        let books = five_books();
        let matches = apply_filter(&books, &Filter::any().with_genre(GenreId::new("fantasy")));
        assert_eq!(ids(&matches), ["2", "5"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let books = five_books();
        assert!(apply_filter(&books, &Filter::any().with_title("zzz-nomatch")).is_empty());
    }

    #[test]
    fn test_unknown_ids_never_match() {
        let books = five_books();
        assert!(apply_filter(&books, &Filter::any().with_author(AuthorId::new("ghost"))).is_empty());
        assert!(apply_filter(&books, &Filter::any().with_genre(GenreId::new("ghost"))).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let books = five_books();
        assert_eq!(find_by_id(&books, &BookId::new("3")).map(|b| b.title.as_str()), Some("Three"));
        assert!(find_by_id(&books, &BookId::new("99")).is_none());
    }

    #[test]
    fn test_find_by_id_over_references() {
        let books = five_books();
        let matches = apply_filter(&books, &Filter::any().with_genre(GenreId::new("fantasy")));
        assert!(find_by_id(&matches, &BookId::new("5")).is_some());
        assert!(find_by_id(&matches, &BookId::new("1")).is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let books = vec![book("1", "First", "a", &[]), book("1", "Second", "a", &[])];
        assert_eq!(find_by_id(&books, &BookId::new("1")).unwrap().title, "First");
    }

    fn arb_books() -> impl Strategy<Value = Vec<Book>> {
        let titles = prop::sample::select(vec!["The Hobbit", "Dune", "another theme", "EMMA", "Théâtre", ""]);
        let authors = prop::sample::select(vec!["a1", "a2", "a3"]);
        let genres = prop::collection::vec(prop::sample::select(vec!["g1", "g2", "g3"]), 0..3);
        prop::collection::vec((titles, authors, genres), 0..24).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, author, genres))| book(&i.to_string(), title, author, &genres))
                .collect()
        })
    }

    fn arb_filter() -> impl Strategy<Value = Filter> {
        let title = prop::sample::select(vec!["", " ", "the", "THE", "e", "dune", "zzz"]);
        let author = prop::option::of(prop::sample::select(vec!["a1", "a2", "ghost"]));
        let genre = prop::option::of(prop::sample::select(vec!["g1", "g3", "ghost"]));
        (title, author, genre).prop_map(|(title, author, genre)| Filter {
            title: title.to_string(),
            author: author.map(AuthorId::new),
            genre: genre.map(GenreId::new),
        })
    }

    proptest! {
        #[test]
        fn prop_identity_filter(books in arb_books()) {
            let matches = apply_filter(&books, &Filter::any());
            prop_assert_eq!(matches, books.iter().collect::<Vec<_>>());
        }

        #[test]
        fn prop_result_is_ordered_subsequence(books in arb_books(), filter in arb_filter()) {
            let matches = apply_filter(&books, &filter);
            let mut cursor = books.iter().map(|b| b as *const Book);
            for found in &matches {
                let target = *found as *const Book;
                prop_assert!(cursor.any(|b| b == target), "result is not an ordered subsequence");
            }
        }

        #[test]
        fn prop_result_is_exactly_the_matching_books(books in arb_books(), filter in arb_filter()) {
            let matches = apply_filter(&books, &filter);
            for book in &books {
                let included = matches.iter().any(|m| std::ptr::eq(*m, book));
                let title_ok = filter.title.trim().is_empty()
                    || book.title.to_lowercase().contains(&filter.title.to_lowercase());
                let author_ok = filter.author.as_ref().is_none_or(|a| book.author_id == *a);
                let genre_ok = filter.genre.as_ref().is_none_or(|g| book.genre_ids.iter().any(|id| id == g));
                prop_assert_eq!(included, title_ok && author_ok && genre_ok);
            }
        }
    }
}
