use crate::config::settings::QuerySettings;

/// 1-based page window over an ordered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub page_size: usize,
}

impl Page {
    pub fn new(page: Option<usize>, page_size: Option<usize>, settings: &QuerySettings) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(settings.default_page_size)
                .clamp(1, settings.max_page_size),
        }
    }

    /// Saturates instead of overflowing for pages far past any result.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> usize {
        self.page_size
    }

    /// LIMIT and OFFSET as bindable integers, in that order.
    /// SQLite reads a negative OFFSET as 0, so an offset beyond `i64::MAX`
    /// is clamped rather than wrapped.
    pub fn sql_params(&self) -> [i64; 2] {
        let limit = i64::try_from(self.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(self.offset()).unwrap_or(i64::MAX);
        [limit, offset]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None, &QuerySettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_second_page_offset() {
        let page = Page::new(Some(2), Some(10), &QuerySettings::default());
        assert_eq!(page.offset(), 10);
        assert_eq!(page.sql_params(), [10, 10]);
    }

    #[test]
    fn test_bounds_are_clamped() {
        let settings = QuerySettings::default();
        let page = Page::new(Some(0), Some(0), &settings);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);

        let page = Page::new(None, Some(10_000), &settings);
        assert_eq!(page.page_size, settings.max_page_size);
    }

    #[test]
    fn test_huge_page_never_wraps() {
        let settings = QuerySettings::default();

        let page = Page::new(Some(1_000_000_000_000_000_000), Some(10), &settings);
        let [limit, offset] = page.sql_params();
        assert_eq!(limit, 10);
        assert_eq!(offset, i64::MAX);

        let page = Page::new(Some(usize::MAX), Some(10), &settings);
        assert_eq!(page.offset(), usize::MAX);
        assert_eq!(page.sql_params()[1], i64::MAX);
    }
}
