use super::config::PaginationConfig;

/// Yields listing page numbers from 1 until the configured cap
pub struct PageIterator {
    next_page: usize,
    config: PaginationConfig,
}

impl PageIterator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            next_page: 1,
            config,
        }
    }

    fn past_cap(&self) -> bool {
        self.config
            .max_pages
            .is_some_and(|max| self.next_page > max)
    }
}

impl Iterator for PageIterator {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.past_cap() {
            return None;
        }
        let page = self.next_page;
        self.next_page += 1;
        Some(page)
    }
}
