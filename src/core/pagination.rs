pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

/// Fixed-size page windows over an ordered sequence.
///
/// Pages are 1-based. Requests for page 0 or a negative page are clamped to
/// page 1. A page past the end yields an empty window, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn clamp_page(raw: i64) -> usize {
        if raw < 1 {
            1
        } else {
            usize::try_from(raw).unwrap_or(usize::MAX)
        }
    }

    /// Half-open window `[(page-1)*size, (page-1)*size + size)` over `items`.
    pub fn window<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let start = page.max(1).saturating_sub(1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_second_page() {
        let items: Vec<u32> = (1..=19).collect();
        let paginator = Paginator::default();

        assert_eq!(paginator.window(&items, 1), &items[0..10]);
        assert_eq!(paginator.window(&items, 2), &items[10..19]);
        assert_eq!(paginator.window(&items, 2).len(), 9);
    }

    #[test]
    fn test_page_beyond_extent_is_empty() {
        let items: Vec<u32> = (1..=19).collect();
        let paginator = Paginator::default();

        assert!(paginator.window(&items, 3).is_empty());
        assert!(paginator.window(&items, 123).is_empty());
        assert!(paginator.window(&items, usize::MAX).is_empty());
    }

    #[test]
    fn test_window_never_exceeds_page_size() {
        let items: Vec<u32> = (0..57).collect();
        let paginator = Paginator::new(7);

        for page in 1..=12 {
            assert!(paginator.window(&items, page).len() <= 7);
        }
        let total: usize = (1..=12).map(|p| paginator.window(&items, p).len()).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(Paginator::clamp_page(0), 1);
        assert_eq!(Paginator::clamp_page(-4), 1);
        assert_eq!(Paginator::clamp_page(1), 1);
        assert_eq!(Paginator::clamp_page(5), 5);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(Paginator::default().window(&items, 1).is_empty());
    }
}
