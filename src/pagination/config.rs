/// Bounds for the listing crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Last page to fetch; `None` keeps going until a page comes back empty
    pub max_pages: Option<usize>,
}

impl PaginationConfig {
    pub fn unbounded() -> Self {
        Self { max_pages: None }
    }

    pub fn capped_at(max_pages: usize) -> Self {
        Self {
            max_pages: Some(max_pages),
        }
    }
}

impl From<Option<usize>> for PaginationConfig {
    fn from(max_pages: Option<usize>) -> Self {
        max_pages.map_or_else(Self::unbounded, Self::capped_at)
    }
}
