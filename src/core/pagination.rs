//! # Pagination Cursor
//!
//! `offset`/`limit`/`total` plus the arithmetic the views need.
//!
//! - next is allowed while `offset + limit < total`
//! - previous is allowed while `offset - limit >= 0`
//! - current page is `offset / limit + 1`, page count is `ceil(total / limit)`
//!
//! With `offset` kept on a page boundary (it only moves by `limit` steps),
//! "next allowed" and "current page < page count" are the same statement.

/// Cursor into a paged remote list. `limit` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
}

impl Pagination {
    /// Zero limits are bumped to one so the page math never divides by zero.
    pub fn new(offset: usize, limit: usize, total: usize) -> Self {
        Self {
            offset,
            limit: limit.max(1),
            total,
        }
    }

    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.offset >= self.limit
    }

    pub fn next_offset(&self) -> Option<usize> {
        self.offset
            .checked_add(self.limit)
            .filter(|next| *next < self.total)
    }

    pub fn prev_offset(&self) -> Option<usize> {
        self.has_prev().then(|| self.offset - self.limit)
    }

    /// 1-based page number.
    pub fn current_page(&self) -> usize {
        (self.offset / self.limit).saturating_add(1)
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_page_of_hundred() {
        let p = Pagination::new(0, 30, 100);
        assert!(p.has_next());
        assert!(!p.has_prev());
        assert_eq!(p.next_offset(), Some(30));
        assert_eq!(p.prev_offset(), None);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.page_count(), 4);
    }

    #[test]
    fn test_offset_near_usize_max_does_not_wrap() {
        let p = Pagination::new(usize::MAX - 5, 30, 100);
        assert!(!p.has_next());
        assert_eq!(p.next_offset(), None);
        assert!(p.has_prev());

        let p = Pagination::new(usize::MAX, 1, 100);
        assert_eq!(p.current_page(), usize::MAX);
    }

    #[test]
    fn test_last_page_disables_next() {
        let p = Pagination::new(90, 30, 100);
        assert!(!p.has_next());
        assert!(p.has_prev());
        assert_eq!(p.prev_offset(), Some(60));
        assert_eq!(p.current_page(), 4);
    }

    #[test]
    fn test_exact_multiple_total() {
        let p = Pagination::new(60, 30, 90);
        assert!(!p.has_next());
        assert_eq!(p.page_count(), 3);
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_empty_list() {
        let p = Pagination::new(0, 30, 0);
        assert!(!p.has_next());
        assert!(!p.has_prev());
        assert_eq!(p.page_count(), 0);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let p = Pagination::new(0, 0, 10);
        assert_eq!(p.limit, 1);
        assert_eq!(p.page_count(), 10);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_page_numbers_agree_with_controls(
            limit in 1usize..200,
            total in 0usize..5000,
            page in 0usize..100,
        ) {
            let p = Pagination::new(page * limit, limit, total);

            prop_assert_eq!(p.has_next(), p.current_page() < p.page_count());
            prop_assert_eq!(p.has_prev(), p.current_page() > 1);
        }

        #[test]
        fn prop_stepping_stays_in_bounds(
            limit in 1usize..100,
            total in 0usize..2000,
            steps in proptest::collection::vec(any::<bool>(), 0..60),
        ) {
            let mut p = Pagination::new(0, limit, total);
            let last_boundary = p.page_count().max(1) * limit;

            for forward in steps {
                let moved = if forward { p.next_offset() } else { p.prev_offset() };
                if let Some(offset) = moved {
                    p.offset = offset;
                }
                prop_assert!(p.offset < last_boundary);
                prop_assert_eq!(p.offset % limit, 0);
            }
        }
    }
}
