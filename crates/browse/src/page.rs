use std::num::NonZeroUsize;

/// Number of books revealed per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(36) {
    Some(size) => size,
    None => panic!("page size must be positive"),
};

/// Everything revealed so far: the first `page` pages of the matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visible<'a, T> {
    pub items: &'a [T],
    /// Matches not yet revealed
    pub remaining: usize,
}
impl<T> Visible<'_, T> {
    /// Returns `true` if another page can be revealed.
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }
}

/// Only the newly revealed page, and the page counter after revealing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increment<'a, T> {
    pub items: &'a [T],
    pub page: usize,
}

/// Cumulative slice of `matches` up to and including `page`.
///
/// Never slices past the end: `items` is clamped to `matches.len()` and
/// `remaining` bottoms out at zero.
pub fn visible_slice<T>(matches: &[T], page: usize, page_size: NonZeroUsize) -> Visible<'_, T> {
    let revealed = page.saturating_mul(page_size.get());
    let end = revealed.min(matches.len());
    Visible {
        items: &matches[..end],
        remaining: matches.len().saturating_sub(revealed),
    }
}

/// The page following `page`, for appending to what is already shown.
///
/// Asking for a page beyond the end yields an empty slice.
pub fn next_page<T>(matches: &[T], page: usize, page_size: NonZeroUsize) -> Increment<'_, T> {
    let start = page.saturating_mul(page_size.get()).min(matches.len());
    let end = page.saturating_add(1).saturating_mul(page_size.get()).min(matches.len());
    Increment {
        items: &matches[start..end],
        page: page.saturating_add(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[rstest]
    #[case(5, 1, 2, 2, 3)]
    #[case(5, 2, 2, 4, 1)]
    #[case(5, 3, 2, 5, 0)]
    #[case(5, 10, 2, 5, 0)]
    #[case(0, 1, 2, 0, 0)]
    #[case(4, 2, 2, 4, 0)]
    #[case(3, 0, 2, 0, 3)]
    fn test_visible_slice(
        #[case] len: usize,
        #[case] page: usize,
        #[case] page_size: usize,
        #[case] items: usize,
        #[case] remaining: usize,
    ) {
        let matches: Vec<usize> = (0..len).collect();
        let visible = visible_slice(&matches, page, size(page_size));
        assert_eq!(visible.items, &matches[..items]);
        assert_eq!(visible.remaining, remaining);
        assert_eq!(visible.has_more(), remaining > 0);
    }

    #[rstest]
    #[case(5, 1, 2, &[2, 3])]
    #[case(5, 2, 2, &[4])]
    #[case(5, 3, 2, &[])]
    #[case(0, 1, 2, &[])]
    fn test_next_page(#[case] len: usize, #[case] page: usize, #[case] page_size: usize, #[case] expected: &[usize]) {
        let matches: Vec<usize> = (0..len).collect();
        let increment = next_page(&matches, page, size(page_size));
        assert_eq!(increment.items, expected);
        assert_eq!(increment.page, page + 1);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let matches = [1, 2, 3];
        assert_eq!(visible_slice(&matches, usize::MAX, size(36)).items, &matches);
        let increment = next_page(&matches, usize::MAX, size(36));
        assert!(increment.items.is_empty());
        assert_eq!(increment.page, usize::MAX);
    }

    #[test]
    fn test_default_page_size() {
        assert_eq!(DEFAULT_PAGE_SIZE.get(), 36);
    }

    proptest! {
        #[test]
        fn prop_visible_never_exceeds_matches(len in 0usize..200, page in 0usize..50, page_size in 1usize..40) {
            let matches: Vec<usize> = (0..len).collect();
            let visible = visible_slice(&matches, page, size(page_size));
            prop_assert!(visible.items.len() <= matches.len());
            prop_assert_eq!(visible.items.len(), (page * page_size).min(matches.len()));
            prop_assert_eq!(visible.remaining, matches.len().saturating_sub(page * page_size));
        }

        #[test]
        fn prop_increments_concatenate_to_visible(len in 0usize..200, page_size in 1usize..40) {
            let matches: Vec<usize> = (0..len).collect();
            let page_size = size(page_size);
            let mut page = 1;
            let mut shown = visible_slice(&matches, page, page_size).items.to_vec();
            while visible_slice(&matches, page, page_size).has_more() {
                let increment = next_page(&matches, page, page_size);
                prop_assert!(!increment.items.is_empty());
                shown.extend_from_slice(increment.items);
                page = increment.page;
                prop_assert_eq!(&shown[..], visible_slice(&matches, page, page_size).items);
            }
            prop_assert_eq!(shown, matches.clone());
            let exhausted = next_page(&matches, page, page_size);
            prop_assert!(exhausted.items.is_empty());
            prop_assert_eq!(exhausted.page, page + 1);
        }
    }
}
